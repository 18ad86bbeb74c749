// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{DEFAULT_BASE_URL, ENV_API_URL, ENV_INIT_DATA};
use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn type_arg() -> Arg {
    Arg::new("type")
        .long("type")
        .value_parser(["income", "expense"])
        .help("income|expense")
}

fn limit_arg(default: &'static str) -> Arg {
    Arg::new("limit")
        .long("limit")
        .value_parser(value_parser!(u32))
        .default_value(default)
}

pub fn build_cli() -> Command {
    Command::new("finmini")
        .about("Personal finance tracker client")
        .version(clap::crate_version!())
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .env(ENV_API_URL)
                .default_value(DEFAULT_BASE_URL)
                .help("Base URL of the finance service"),
        )
        .arg(
            Arg::new("init-data")
                .long("init-data")
                .global(true)
                .env(ENV_INIT_DATA)
                .hide_env_values(true)
                .help("Identity token passed to the service verbatim"),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions")
                .subcommand(
                    Command::new("add")
                        .arg(type_arg().required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_negative_numbers(true),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Defaults to the first suggestion for the type"),
                        )
                        .arg(Arg::new("currency").long("currency"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(limit_arg("50"))
                        .arg(Arg::new("skip").long("skip").value_parser(value_parser!(u32)))
                        .arg(type_arg())
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("from").long("from").help("YYYY-MM-DD"))
                        .arg(Arg::new("to").long("to").help("YYYY-MM-DD")),
                ))
                .subcommand(
                    Command::new("show")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64)))
                        .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
                )
                .subcommand(
                    Command::new("rm")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                )
                .subcommand(Command::new("history").arg(limit_arg("50"))),
        )
        .subcommand(
            Command::new("report").about("Monthly summary").subcommand(
                Command::new("monthly")
                    .arg(Arg::new("year").long("year").value_parser(value_parser!(i32)))
                    .arg(Arg::new("month").long("month").value_parser(value_parser!(u32)))
                    .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
            ),
        )
        .subcommand(
            Command::new("category")
                .about("Categories")
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("suggest").arg(type_arg())),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true))
                    .arg(limit_arg("100")),
            ),
        )
}
