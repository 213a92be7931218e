//! navgate command-line tool

mod args;

use std::sync::Arc;

use clap::Parser;
use navgate_client::config::Settings;
use navgate_client::fetch::{FileTreeSource, TcpTreeSource};
use navgate_client::logging::init_logging;
use navgate_client::menu::render_menu;
use navgate_client::{
    Admission, FetchError, RouteTable, TreeFetcher, TreeSource, UserContext, filter_tree,
    resolve_access, route_admission,
};
use navgate_common::{PlatformClass, Tree};
use tracing::debug;

use args::{Args, Command, namespace};

/// Username used with saved tree documents when none is configured
const OFFLINE_USERNAME: &str = "offline";

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    let settings = match &args.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    debug!(?settings, "loaded settings");

    let table = RouteTable::builtin();

    // Path resolution needs no tree
    if let Command::Path { feature, admin } = &args.command {
        println!("{}", table.resolve(feature, namespace(*admin)));
        return;
    }

    let tree = match load_tree(&args, &settings).await {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Access { feature } => {
            let level = resolve_access(Some(&tree), &feature);
            println!(
                "{}: {} (view: {}, edit: {})",
                feature,
                level,
                yes_no(level.can_view()),
                yes_no(level.can_edit())
            );
        }
        Command::Menu {
            admin,
            current,
            json,
        } => {
            let ns = namespace(admin);
            if json {
                let visible = filter_tree(&tree, ns, table.restricted());
                match serde_json::to_string_pretty(&visible) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize menu: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                print!("{}", render_menu(&tree, ns, table, current.as_deref()));
            }
        }
        Command::Active {
            current,
            feature,
            admin,
        } => {
            let active = table.is_active(&current, &feature, namespace(admin));
            println!("{}", if active { "active" } else { "inactive" });
        }
        Command::Gate { feature } => {
            // The tree is loaded at this point, so the gate never waits here
            match route_admission(Some(&tree), false, Some(&feature)) {
                Admission::Admit => println!("admit"),
                Admission::Deny => {
                    println!("deny");
                    std::process::exit(2);
                }
                Admission::Wait => println!("wait"),
            }
        }
        Command::Path { .. } => {}
    }
}

/// Fetch the tree from the file or provider selected by args and settings
async fn load_tree(args: &Args, settings: &Settings) -> Result<Tree, FetchError> {
    let platform: PlatformClass = args
        .platform
        .map(Into::into)
        .unwrap_or(settings.platform);
    let timeout = settings.fetch_timeout_with(args.timeout);

    let source: Arc<dyn TreeSource> = match &args.tree {
        Some(path) => Arc::new(FileTreeSource::new(path)),
        None => {
            let host = args.server.as_deref().unwrap_or(&settings.server_address);
            let port = args.port.unwrap_or(settings.server_port);
            Arc::new(TcpTreeSource::new(host, port).with_read_timeout(timeout))
        }
    };

    let username = args
        .user
        .as_deref()
        .or(settings.username.as_deref())
        .unwrap_or(OFFLINE_USERNAME);
    let user = UserContext::new(username, args.token.as_deref());

    TreeFetcher::new(source)
        .with_timeout(timeout)
        .fetch(&user, platform)
        .await
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
