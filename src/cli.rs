// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("finsan")
        .about("FinSan: personal finance tracker (budgets, goals, portfolio, recurring, CSV import)")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the database file"))
        .subcommand(
            Command::new("signup")
                .about("Create an account and sign in")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true))
                .arg(Arg::new("name").long("name"))
                .arg(Arg::new("currency").long("currency").default_value("USD")),
        )
        .subcommand(
            Command::new("login")
                .about("Sign in")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(Command::new("logout").about("Sign out"))
        .subcommand(Command::new("whoami").about("Show the signed-in user"))
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"])
                                .default_value("expense"),
                        )
                        .arg(Arg::new("category").long("category").default_value("Other")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("month").long("month"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(Command::new("rm").arg(Arg::new("id").long("id").required(true))),
        )
        .subcommand(
            Command::new("budget")
                .about("Manage monthly category budgets")
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("limit").long("limit").required(true)),
                )
                .subcommand(json_flags(Command::new("status")))
                .subcommand(
                    Command::new("rm").arg(Arg::new("category").long("category").required(true)),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Manage savings goals")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(Arg::new("current").long("current").default_value("0")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("update")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("current").long("current").required(true)),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").long("id").required(true))),
        )
        .subcommand(
            Command::new("invest")
                .about("Manage investment holdings")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("ticker").long("ticker").required(true))
                        .arg(Arg::new("quantity").long("quantity").required(true))
                        .arg(Arg::new("cost").long("cost").required(true))
                        .arg(Arg::new("price").long("price").required(true)),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("rm").arg(Arg::new("ticker").long("ticker").required(true)),
                )
                .subcommand(
                    Command::new("refresh")
                        .about("Refresh prices from the quote provider")
                        .arg(Arg::new("ticker").long("ticker")),
                ),
        )
        .subcommand(
            Command::new("recurring")
                .about("Manage recurring entries")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"])
                                .default_value("expense"),
                        )
                        .arg(Arg::new("category").long("category").default_value("Other"))
                        .arg(
                            Arg::new("frequency")
                                .long("frequency")
                                .value_parser(["weekly", "monthly"])
                                .default_value("monthly"),
                        ),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("rm").arg(Arg::new("id").long("id").required(true)))
                .subcommand(Command::new("apply").about("Materialize all due entries")),
        )
        .subcommand(
            Command::new("import").about("Import data").subcommand(
                Command::new("transactions")
                    .about("Import a brokerage CSV export")
                    .arg(Arg::new("path").long("path").required(true)),
            ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .value_parser(["csv", "json"])
                            .default_value("csv"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Income, expenses, net worth, savings rate, breakdown")
                .arg(Arg::new("month").long("month").help("YYYY-MM, default current")),
        ))
        .subcommand(
            Command::new("prefs")
                .about("Preferences")
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("currency").long("currency"))
                        .arg(Arg::new("locale").long("locale"))
                        .arg(
                            Arg::new("refresh-interval-ms")
                                .long("refresh-interval-ms")
                                .value_parser(value_parser!(u64)),
                        ),
                )
                .subcommand(Command::new("show")),
        )
}
