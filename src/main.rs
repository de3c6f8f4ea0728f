use balanced_trees::avl_tree::AvlMap;
use balanced_trees::red_black_tree::RedBlackMap;
use balanced_trees::{words, Map};
use log::{error, info, LevelFilter};
use simplelog::{Config as LogConfig, SimpleLogger};
use std::env;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

const DEFAULT_PATH: &str = "pride-and-prejudice.txt";
const USAGE: &str = "usage: balanced-trees [PATH] [--sorted] [--verify] [-v | --verbose]";

struct Config {
    path: PathBuf,
    sorted: bool,
    verify: bool,
    log_level: LevelFilter,
}

impl Config {
    fn from_args<I>(args: I) -> Result<Config, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut path = None;
        let mut sorted = false;
        let mut verify = false;
        let mut log_level = LevelFilter::Info;

        for arg in args {
            match arg.as_str() {
                "--sorted" => sorted = true,
                "--verify" => verify = true,
                "-v" | "--verbose" => log_level = LevelFilter::Debug,
                flag if flag.starts_with('-') => return Err(format!("unknown flag {}", flag)),
                _ => {
                    if path.is_some() {
                        return Err(format!("unexpected argument {}", arg));
                    }
                    path = Some(PathBuf::from(&arg));
                },
            }
        }

        Ok(Config {
            path: path.unwrap_or_else(|| PathBuf::from(DEFAULT_PATH)),
            sorted,
            verify,
            log_level,
        })
    }
}

// Counts every word, then looks every word up again, returning the elapsed seconds.
fn count_and_lookup<M>(map: &mut M, words: &[String]) -> f64
where
    M: Map<String, usize>,
{
    let start = Instant::now();
    words::count_words(map, words.iter().cloned());
    for word in words {
        map.contains_key(word.as_str());
    }
    let elapsed = start.elapsed();
    elapsed.as_secs() as f64 + f64::from(elapsed.subsec_nanos()) / 1_000_000_000.0
}

fn report<M>(name: &str, map: &M, seconds: f64)
where
    M: Map<String, usize>,
{
    info!("{}: {} s", name, seconds);
    info!("{}: total different words: {}", name, map.len());
    info!("{}: frequency of PRIDE: {:?}", name, map.get("pride"));
    info!("{}: frequency of PREJUDICE: {:?}", name, map.get("prejudice"));
    info!(
        "{}: is bst: {}, is balanced: {}",
        name,
        map.is_bst(),
        map.is_balanced()
    );
}

// Removes every word and checks both invariants after each removal. Returns the word whose
// removal broke an invariant.
fn verify_removals<M>(map: &mut M, words: &[String]) -> Result<(), String>
where
    M: Map<String, usize>,
{
    for word in words {
        map.remove(word.as_str());
        if !map.is_bst() || !map.is_balanced() {
            return Err(word.clone());
        }
    }
    Ok(())
}

fn run<M>(name: &str, mut map: M, config: &Config, words: &[String]) -> bool
where
    M: Map<String, usize>,
{
    let seconds = count_and_lookup(&mut map, words);
    report(name, &map, seconds);

    if config.verify {
        if let Err(word) = verify_removals(&mut map, words) {
            error!("{}: invariant violated after removing {:?}", name, word);
            return false;
        }
        info!("{}: invariants held after every removal, {} keys left", name, map.len());
    }
    true
}

fn main() {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}\n{}", err, USAGE);
            process::exit(2);
        },
    };

    if SimpleLogger::init(config.log_level, LogConfig::default()).is_err() {
        eprintln!("failed to initialize logger");
    }

    let mut words = match words::read_words(&config.path) {
        Ok(words) => words,
        Err(err) => {
            error!("cannot read {}: {}", config.path.display(), err);
            process::exit(1);
        },
    };
    info!("{}: total words: {}", config.path.display(), words.len());

    if config.sorted {
        words.sort();
    }

    let red_black_ok = run("RedBlackMap", RedBlackMap::new(), &config, &words);
    let avl_ok = run("AvlMap", AvlMap::new(), &config, &words);

    if !red_black_ok || !avl_ok {
        process::exit(1);
    }
}
