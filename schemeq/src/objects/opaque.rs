use std::{any::Any, fmt};

/// Host payload the equivalence predicates know nothing about
/// (ports, records, foreign handles). Only ever compared by identity.
pub struct Opaque {
    type_name: &'static str,
    payload: Box<dyn Any + Send + Sync>,
}

impl Opaque {
    pub fn new<T: Any + Send + Sync>(type_name: &'static str, payload: T) -> Self {
        Self {
            type_name,
            payload: Box::new(payload),
        }
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.payload.downcast_mut()
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opaque")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downcast_to_payload_type() {
        let mut port = Opaque::new("port", 3u16);
        assert_eq!(port.type_name(), "port");
        assert_eq!(port.downcast_ref::<u16>(), Some(&3));
        assert!(port.downcast_ref::<u32>().is_none());
        if let Some(n) = port.downcast_mut::<u16>() {
            *n += 1;
        }
        assert_eq!(port.downcast_ref::<u16>(), Some(&4));
    }
}
