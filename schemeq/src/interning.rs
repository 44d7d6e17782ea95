use std::{
    collections::HashMap,
    fmt,
    hash::{Hash, Hasher},
    sync::{Arc, LazyLock},
};

use parking_lot::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(usize);

impl SymbolId {
    pub fn as_usize(self) -> usize {
        self.0
    }
}

/// Canonical symbol. Equal names always resolve to the same id, so
/// comparing two symbols is a single integer compare.
#[derive(Clone)]
pub struct Symbol {
    id: SymbolId,
    name: Arc<str>,
}

struct SymbolTableImpl {
    names: Vec<Arc<str>>,
    mappings: HashMap<Arc<str>, SymbolId, ahash::RandomState>,
}

/// Process-wide intern table.
///
/// Populated lazily on first occurrence of a name. Entries are never evicted
/// for the lifetime of the process.
pub struct SymbolTable(RwLock<SymbolTableImpl>);

static SYMBOLS: LazyLock<SymbolTable> = LazyLock::new(SymbolTable::new);

impl SymbolTableImpl {
    fn new() -> Self {
        Self {
            names: Vec::new(),
            mappings: HashMap::default(),
        }
    }

    fn get(&self, name: &str) -> Option<Symbol> {
        let &id = self.mappings.get(name)?;
        Some(Symbol {
            id,
            name: self.names[id.0].clone(),
        })
    }

    fn get_or_add(&mut self, name: &str) -> Symbol {
        // another writer may have won the race since the read lock was dropped
        if let Some(symbol) = self.get(name) {
            return symbol;
        }
        let id = SymbolId(self.names.len());
        let interned = Arc::<str>::from(name);
        self.names.push(interned.clone());
        self.mappings.insert(interned.clone(), id);
        log::debug!("interned symbol `{name}` as #{}", id.0);
        Symbol { id, name: interned }
    }
}

impl SymbolTable {
    fn new() -> Self {
        Self(RwLock::new(SymbolTableImpl::new()))
    }

    pub fn global() -> &'static SymbolTable {
        &SYMBOLS
    }

    pub fn intern(&self, name: &str) -> Symbol {
        if let Some(symbol) = self.0.read().get(name) {
            return symbol;
        }
        self.0.write().get_or_add(name)
    }

    /// Find an already interned symbol without adding `name` to the table.
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.0.read().get(name)
    }

    pub fn len(&self) -> usize {
        self.0.read().names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Symbol {
    pub fn intern(name: &str) -> Self {
        SymbolTable::global().intern(name)
    }

    #[inline]
    pub fn id(&self) -> SymbolId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Symbol {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({}#{})", self.name, self.id.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_interns_to_same_id() {
        let a = Symbol::intern("interning-same-name");
        let b = Symbol::intern(&String::from("interning-same-name"));
        assert_eq!(a.id(), b.id());
        assert_eq!(a, b);
        assert_eq!(a.name(), "interning-same-name");
    }

    #[test]
    fn different_names_get_different_ids() {
        let a = Symbol::intern("interning-left");
        let b = Symbol::intern("interning-right");
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn lookup_does_not_insert() {
        let table = SymbolTable::global();
        assert!(table.lookup("interning-never-added").is_none());
        let before = table.lookup("interning-added-later");
        assert!(before.is_none());
        let added = table.intern("interning-added-later");
        assert_eq!(table.lookup("interning-added-later"), Some(added));
    }

    #[test]
    fn table_grows_once_per_name() {
        let table = SymbolTable::global();
        table.intern("interning-grows-once");
        let len = table.len();
        table.intern("interning-grows-once");
        // other tests may intern concurrently, so only check we did not add
        assert!(table.len() >= len);
        assert!(!table.is_empty());
        assert_eq!(
            table.intern("interning-grows-once").id(),
            table.intern("interning-grows-once").id()
        );
    }

    #[test]
    fn interning_from_many_threads_agrees() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| Symbol::intern("interning-threads").id()))
            .collect();
        let ids: Vec<SymbolId> = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect();
        assert!(ids.windows(2).all(|w| w[0] == w[1]));
    }
}
