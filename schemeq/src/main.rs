use clap::Parser as ClapParser;
use std::process;

use schemeq::{
    CodeId, Opaque, OutputTarget, Procedure, Runtime, RuntimeCreateInfo, Symbol, Value,
};

const PREDICATES: &[&str] = &["eq?", "eqv?", "equal?"];

#[derive(ClapParser, Debug)]
#[command(author, version, about = "Run the equivalence predicates over a catalogue of values", long_about = None)]
struct Cli {
    /// Predicates to evaluate, in order
    #[arg(long = "predicate", short = 'p', help = "eq?, eqv? or equal? (repeatable)")]
    predicates: Vec<String>,

    /// Only run catalogue cases whose name contains this text
    #[arg(long = "case", short = 'c')]
    case: Option<String>,

    /// Print catalogue case names and exit
    #[arg(long)]
    list: bool,

    /// Increase log verbosity (-v debug, -vv trace with call tracing)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct Case {
    name: &'static str,
    left: Value,
    right: Value,
}

impl Case {
    fn new(name: &'static str, left: Value, right: Value) -> Self {
        Self { name, left, right }
    }
}

fn catalogue(runtime: &Runtime) -> Vec<Case> {
    let num = Value::Number;
    let pair = Value::cons(num(1.0), num(2.0));
    let env = Value::vector(vec![Value::symbol("x"), num(1.0)]);
    let port = Value::opaque(Opaque::new("port", ()));
    let primitive = |name: &str| {
        runtime
            .procedure(name)
            .expect("catalogue names a registered builtin")
    };
    let nested = |leaf: f64| Value::vector(vec![num(1.0), Value::vector(vec![num(2.0), num(leaf)])]);

    vec![
        Case::new(
            "interned-symbols",
            Value::symbol("lambda"),
            Value::Symbol(Symbol::intern(&String::from("lambda"))),
        ),
        Case::new("distinct-symbols", Value::symbol("car"), Value::symbol("cdr")),
        Case::new("equal-numbers", num(42.0), num(42.0)),
        Case::new("signed-zeros", num(0.0), num(-0.0)),
        Case::new("nan", num(f64::NAN), num(f64::NAN)),
        Case::new("characters", Value::Character('a'), Value::Character('a')),
        Case::new("booleans", Value::Boolean(true), Value::Boolean(true)),
        Case::new("empty-lists", Value::Nil, Value::list(Vec::new())),
        Case::new("same-pair", pair.clone(), pair),
        Case::new(
            "fresh-pairs",
            Value::cons(num(1.0), num(2.0)),
            Value::cons(num(1.0), num(2.0)),
        ),
        Case::new("nested-vectors", nested(3.0), nested(3.0)),
        Case::new("nested-vectors-leaf", nested(3.0), nested(4.0)),
        Case::new(
            "vector-lengths",
            Value::vector(vec![num(1.0), num(2.0)]),
            Value::vector(vec![num(1.0), num(2.0), num(3.0)]),
        ),
        Case::new(
            "bool-vectors",
            Value::bool_vector(vec![true, false]),
            Value::bool_vector(vec![true, false]),
        ),
        Case::new(
            "pair-vs-vector",
            Value::list(vec![num(1.0)]),
            Value::vector(vec![num(1.0)]),
        ),
        Case::new("strings", Value::string("abc"), Value::string("abc")),
        Case::new("primitives", primitive("equal?"), primitive("equal?")),
        Case::new(
            "closures-same-env",
            Value::Procedure(Procedure::compiled(CodeId::new(1), Some(env.clone()))),
            Value::Procedure(Procedure::compiled(CodeId::new(1), Some(env))),
        ),
        Case::new(
            "closures-fresh-env",
            Value::Procedure(Procedure::compiled(CodeId::new(1), Some(Value::vector(vec![])))),
            Value::Procedure(Procedure::compiled(CodeId::new(1), Some(Value::vector(vec![])))),
        ),
        Case::new("opaque", port.clone(), port),
    ]
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    for predicate in &cli.predicates {
        if !PREDICATES.contains(&predicate.as_str()) {
            eprintln!("Unknown predicate '{}', expected one of {:?}", predicate, PREDICATES);
            process::exit(2);
        }
    }
    let predicates: Vec<&str> = if cli.predicates.is_empty() {
        PREDICATES.to_vec()
    } else {
        cli.predicates.iter().map(String::as_str).collect()
    };

    let mut runtime = Runtime::new(&RuntimeCreateInfo {
        output: OutputTarget::Stdout,
        trace_calls: cli.verbose >= 2,
    });

    let cases: Vec<Case> = catalogue(&runtime)
        .into_iter()
        .filter(|case| cli.case.as_deref().is_none_or(|filter| case.name.contains(filter)))
        .collect();

    if cli.list {
        for case in &cases {
            println!("{}", case.name);
        }
        return;
    }

    log::info!("running {} cases through {:?}", cases.len(), predicates);

    print!("{:<22} {:<28} {:<28}", "case", "left", "right");
    for predicate in &predicates {
        print!(" {:<7}", predicate);
    }
    println!();

    for case in &cases {
        print!(
            "{:<22} {:<28} {:<28}",
            case.name,
            case.left.to_string(),
            case.right.to_string()
        );
        for predicate in &predicates {
            let args = [case.left.clone(), case.right.clone()];
            match runtime.call(predicate, &args) {
                Ok(result) => print!(" {:<7}", result.to_string()),
                Err(err) => {
                    eprintln!("Error running {} on {}: {}", predicate, case.name, err);
                    process::exit(1);
                }
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_cases_are_named_and_runnable() {
        let mut runtime = Runtime::new(&RuntimeCreateInfo {
            output: OutputTarget::Buffer,
            trace_calls: false,
        });
        let cases = catalogue(&runtime);
        for (i, case) in cases.iter().enumerate() {
            assert!(
                cases[..i].iter().all(|other| other.name != case.name),
                "duplicate case {}",
                case.name
            );
            assert!(!matches!(case.left, Value::Unspecified), "{}", case.name);
            for predicate in PREDICATES {
                let args = [case.left.clone(), case.right.clone()];
                let result = runtime.call(predicate, &args).expect("predicate call");
                assert!(result.as_bool().is_some(), "{predicate} on {}", case.name);
            }
        }
    }

    #[test]
    fn builtin_procedures_in_catalogue_are_eq() {
        let runtime = Runtime::default();
        let cases = catalogue(&runtime);
        let case = cases
            .iter()
            .find(|case| case.name == "primitives")
            .expect("primitives case");
        assert!(matches!(case.left, Value::Procedure(_)));
        assert!(schemeq::is_eq(&case.left, &case.right));
    }
}
