//! Builds a small tree, then walks it from several threads while checking membership.

use std::process::ExitCode;
use std::thread;

use log::{error, info};

use redblack::RBTree;
use redblack::concurrent_traversal::{check_membership, run_processes, Event, HarnessConfig, Process};
use redblack::logging::{init_logging, LogConfig};

fn main() -> ExitCode {
    if let Err(err) = init_logging(&LogConfig::from_env()) {
        eprintln!("logging disabled: {err}");
    }

    let mut tree = RBTree::new();
    for v in [55, 40, 30, 35] {
        tree.insert(v);
    }
    if let Err(err) = tree.validate() {
        error!("freshly built tree is broken: {err}");
        return ExitCode::FAILURE
    }
    info!("built {tree:?}");

    let config = HarnessConfig::default();
    let processes = [Process::Inorder, Process::Preorder, Process::Postorder, Process::Snapshot];

    // membership checks run next to the traversals, not after them
    let (summary, lookups) = thread::scope(|s| {
        let lookups = s.spawn(|| check_membership(&tree, &[30, 65], &config));
        let summary = run_processes(&tree, &processes, &config, |event| match event {
            Event::Next { process, worker, item } => println!("PROCESS {process}: {worker} {item}"),
            Event::Completed { process, .. } => println!("PROCESS {process} done!"),
        });
        (summary, lookups.join())
    });

    match lookups {
        Ok(results) => {
            for (value, found) in results {
                println!("Result for {value} is: {found}");
            }
        }
        Err(_) => {
            error!("membership checks panicked");
            return ExitCode::FAILURE
        }
    }

    for worker in &summary.workers {
        info!("{} ran {} processes, emitted {} items", worker.name, worker.jobs, worker.emitted);
    }

    ExitCode::SUCCESS
}
