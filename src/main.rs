use maxclique::dimacs::load_dimacs;
use maxclique::search::{search, search_parallel, SearchConfig};
use maxclique::validate::validate_clique;
use std::io::Write;
use std::time::Instant;

fn main() {
    let mut cfg = SearchConfig::default();
    let mut parallel = false;
    let mut csv_path: Option<String> = None;
    let mut files: Vec<String> = Vec::new();

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--iterations" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.iterations = v.parse().unwrap_or_else(|_| usage_and_exit(2));
                i += 2;
            }
            "--randomization" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.randomization = v.parse().unwrap_or_else(|_| usage_and_exit(2));
                i += 2;
            }
            "--seed" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.seed = Some(v.parse().unwrap_or_else(|_| usage_and_exit(2)));
                i += 2;
            }
            "--chains" | "--workers" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.chains = v.parse().unwrap_or_else(|_| usage_and_exit(2));
                i += 2;
            }
            "--parallel" => {
                parallel = true;
                i += 1;
            }
            "--csv" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                csv_path = Some(v.clone());
                i += 2;
            }
            "--help" | "-h" => usage_and_exit(0),
            flag if flag.starts_with("--") => usage_and_exit(2),
            file => {
                files.push(file.to_string());
                i += 1;
            }
        }
    }

    if files.is_empty() {
        usage_and_exit(2);
    }

    let mut csv = csv_path.map(|path| match std::fs::File::create(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: cannot create {path}: {e}");
            std::process::exit(1);
        }
    });
    if let Some(f) = csv.as_mut() {
        let _ = writeln!(f, "file,clique,time_sec");
    }

    for file in &files {
        let graph = match load_dimacs(file) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("error: {file}: {e}");
                std::process::exit(1);
            }
        };

        let start = Instant::now();
        let result = if parallel {
            search_parallel(&graph, &cfg)
        } else {
            search(&graph, &cfg)
        };
        let best = match result {
            Ok(b) => b,
            Err(e) => {
                eprintln!("error: {file}: {e}");
                std::process::exit(1);
            }
        };
        let elapsed = start.elapsed().as_secs_f64();

        // An invalid result is reported, not retried; the remaining files
        // still run.
        if let Err(e) = validate_clique(&graph, &best) {
            eprintln!("*** WARNING: incorrect clique for {file}: {e} ***");
        }

        println!("{file}, result - {}, time - {elapsed:.3}", best.len());
        if let Some(f) = csv.as_mut() {
            let _ = writeln!(f, "{file},{},{elapsed:.3}", best.len());
        }
    }
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  maxclique [OPTIONS] FILE...\n\nRuns randomized local-search clique trials on DIMACS .clq instances.\n\nOptions:\n  --iterations N       Growth trials per instance (default: 10000)\n  --randomization R    Randomization strength (accepted, currently unused)\n  --seed SEED          Deterministic base seed (optional)\n  --parallel           Split trials across worker chains\n  --chains/--workers N Number of chains for --parallel (default: auto-detect)\n  --csv PATH           Append per-instance results to a CSV file\n"
    );
    std::process::exit(code)
}
