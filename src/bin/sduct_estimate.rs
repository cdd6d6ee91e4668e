//! sduct_estimate: CLI front end for the estimation engine.
//!
//! Reads a JSON query on stdin or as --json, estimates every metric for
//! the requested duct shape and prints the report as JSON.
//!
//! Usage:
//!   echo '{"shape":"Circle-Circle","angle":18.0,"velocity":150.0}' | sduct_estimate
//!   sduct_estimate --json '{"shape":"Square-Circle","angle":7.5,"velocity":208}' --deterministic
//!   sduct_estimate --catalog tables.json --reject --json '{...}'
//!
//! Flags:
//!   --catalog <file>  load reference tables from a JSON file instead of the built-in ones
//!   --deterministic   disable measurement jitter
//!   --reject          reject angles outside the sampled range instead of clamping

use std::env;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::process;

use serde_json::json;

use sduct::dataset::Catalog;
use sduct::estimate::{Estimator, EstimatorCfg, Query};
use sduct::interpolation::RangePolicy;

#[derive(Debug, Default, PartialEq)]
struct Args {
    json         : Option<String>,
    catalog      : Option<String>,
    deterministic: bool,
    reject       : bool,
}

fn parse_args<I>(argv: I) -> Result<Args, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = Args::default();
    let mut it = argv.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--json"          => args.json = Some(it.next().ok_or("--json needs a value")?),
            "--catalog"       => args.catalog = Some(it.next().ok_or("--catalog needs a file")?),
            "--deterministic" => args.deterministic = true,
            "--reject"        => args.reject = true,
            other             => return Err(format!("unknown argument `{}`", other)),
        }
    }
    Ok(args)
}

fn estimator_cfg(args: &Args) -> EstimatorCfg {
    let policy = if args.reject { RangePolicy::Reject } else { RangePolicy::Clamp };
    EstimatorCfg::new()
        .set_range_policy(policy)
        .set_jitter(!args.deterministic)
}

fn read_stdin() -> String {
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("ERROR: failed to read stdin: {}", e);
        process::exit(1);
    }
    buf
}

fn load_catalog(path: Option<&str>) -> Catalog {
    let Some(path) = path else {
        return Catalog::builtin();
    };
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("ERROR: cannot open catalog {}: {}", path, e);
            process::exit(1);
        }
    };
    match Catalog::from_reader(BufReader::new(file)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ERROR: invalid catalog {}: {}", path, e);
            process::exit(1);
        }
    }
}

fn main() {
    let args = match parse_args(env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(2);
        }
    };
    let input = args.json.clone().unwrap_or_else(read_stdin);

    let query: Query = match serde_json::from_str(&input) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("ERROR: Invalid JSON query: {}", e);
            process::exit(1);
        }
    };

    let estimator = Estimator::new(load_catalog(args.catalog.as_deref()), estimator_cfg(&args));

    match estimator.estimate(&query) {
        Ok(report) => {
            let out = json!({
                "query": query,
                "config": estimator.cfg(),
                "report": report,
            });
            println!("{}", serde_json::to_string_pretty(&out).unwrap_or_else(|_| out.to_string()));
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    }
}
