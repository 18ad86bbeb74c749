// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finmini::{api::Transport, cli, commands, config::ClientConfig, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init();

    let matches = cli::build_cli().get_matches();
    let transport = Transport::new(&ClientConfig::from_matches(&matches))?;

    match matches.subcommand() {
        Some(("tx", sub)) => commands::transactions::handle(&transport, sub).await?,
        Some(("report", sub)) => commands::reports::handle(&transport, sub).await?,
        Some(("category", sub)) => commands::categories::handle(&transport, sub).await?,
        Some(("export", sub)) => commands::exporter::handle(&transport, sub).await?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
