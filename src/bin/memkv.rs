use clap::{arg, value_parser, Arg, ArgMatches, Command};
use log::{error, info};
use memkv::workload::{self, WorkloadReport};
use memkv::{
    DriverConfig, EngineKind, KvsEngine, MemTable, NaiveThreadPool, PoolKind, RayonThreadPool,
    Result, ShardedMemTable, SharedQueueThreadPool, ThreadPool,
};
use std::process::exit;
use stderrlog::{LogLevelNum, Timestamp};

fn cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommand_required(true)
        .disable_help_subcommand(true)
        .args([
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("JSON file with driver settings. Flags given on the command line win."),
            Arg::new("engine")
                .short('e')
                .long("engine")
                .value_name("ENGINE_NAME")
                .global(true)
                .help("Store to construct, either \"memtable\" or \"sharded\". Default memtable"),
            arg!(-v --verbose ... "Raise log verbosity, repeat for more").global(true),
            arg!(-q --quiet "Silence logging").global(true),
        ])
        .subcommand(Command::new("demo").about("Run the sample put/get/delete scenario"))
        .subcommand(
            Command::new("stress")
                .about("Put distinct keys concurrently, then read them back concurrently")
                .args([
                    Arg::new("thread-pool")
                        .short('t')
                        .long("thread-pool")
                        .value_name("THREADPOOL_NAME")
                        .help("One of naive, shared_queue or rayon. Default shared_queue"),
                    Arg::new("workers")
                        .short('w')
                        .long("workers")
                        .value_name("WORKER_NUM")
                        .value_parser(value_parser!(u32))
                        .help(
                            "Worker num of the shared_queue and rayon pools, \
                             ignored by naive. Default 8",
                        ),
                    Arg::new("keys")
                        .short('k')
                        .long("keys")
                        .value_name("KEY_NUM")
                        .value_parser(value_parser!(u32))
                        .help("Number of distinct keys to write and read. Default 1000"),
                ]),
        )
        .subcommand(Command::new("config").about("Print the effective driver settings as JSON"))
}

fn init_logging(matches: &ArgMatches) {
    let verbosity = match matches.get_count("verbose") {
        0 => LogLevelNum::Warn,
        1 => LogLevelNum::Info,
        2 => LogLevelNum::Debug,
        _ => LogLevelNum::Trace,
    };
    if let Err(e) = stderrlog::new()
        .module(module_path!())
        .quiet(matches.get_flag("quiet"))
        .timestamp(Timestamp::Second)
        .verbosity(verbosity)
        .init()
    {
        eprintln!("Failed to set up logging: {e}");
    }
}

fn resolve_config(matches: &ArgMatches) -> Result<DriverConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => DriverConfig::load(path)?,
        None => DriverConfig::default(),
    };
    if let Some(engine) = matches.get_one::<String>("engine") {
        config.engine = engine.parse()?;
    }
    Ok(config)
}

fn demo<E: KvsEngine>(store: &E) {
    match store.put("name".to_owned(), "Replit".to_owned()) {
        Ok(()) => println!("Put 'name' successfully"),
        Err(e) => println!("Error: {e}"),
    }

    println!("Get 'name': {}", store.get("name"));

    if let Err(e) = store.put(String::new(), "EmptyKey".to_owned()) {
        println!("Error: {e}");
    }

    store.delete("name");
    println!("Get 'name' after delete: {}", store.get("name"));
}

fn stress_with<E: KvsEngine>(store: &E, config: &DriverConfig) -> Result<WorkloadReport> {
    let report = match config.thread_pool {
        PoolKind::Naive => {
            workload::run(store, &NaiveThreadPool::new(config.workers)?, config.keys)
        }
        PoolKind::SharedQueue => workload::run(
            store,
            &SharedQueueThreadPool::new(config.workers)?,
            config.keys,
        ),
        PoolKind::Rayon => {
            workload::run(store, &RayonThreadPool::new(config.workers)?, config.keys)
        }
    };
    Ok(report)
}

fn stress(config: &DriverConfig) -> Result<WorkloadReport> {
    info!(
        "ENGINE: {}, THREAD POOL: {}, WORKERS: {}",
        config.engine, config.thread_pool, config.workers
    );
    match config.engine {
        EngineKind::MemTable => stress_with(&MemTable::new(), config),
        EngineKind::Sharded => stress_with(&ShardedMemTable::new(), config),
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("demo", sub)) => {
            let config = resolve_config(sub)?;
            match config.engine {
                EngineKind::MemTable => demo(&MemTable::new()),
                EngineKind::Sharded => demo(&ShardedMemTable::new()),
            }
        }
        Some(("stress", sub)) => {
            let mut config = resolve_config(sub)?;
            if let Some(pool) = sub.get_one::<String>("thread-pool") {
                config.thread_pool = pool.parse()?;
            }
            if let Some(&workers) = sub.get_one::<u32>("workers") {
                config.workers = workers;
            }
            if let Some(&keys) = sub.get_one::<u32>("keys") {
                config.keys = keys;
            }
            config.validate()?;

            let report = stress(&config)?;
            println!("{report}");
            if !report.is_clean() {
                error!("{} reads did not match their writes", report.mismatches);
                exit(1);
            }
        }
        Some(("config", sub)) => {
            let config = resolve_config(sub)?;
            println!("{}", config.to_json()?);
        }
        _ => unreachable!(),
    }
    Ok(())
}

fn main() {
    let matches = cli().get_matches();
    init_logging(&matches);

    if let Err(e) = run(&matches) {
        eprintln!("Error: {e}");
        exit(1);
    }
}
