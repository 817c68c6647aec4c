// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finsan::models::TxType;
use finsan::store::Store;
use finsan::{auth, cli, commands::importer};
use std::io::Write;
use tempfile::{NamedTempFile, tempdir};

fn signed_in_store(dir: &std::path::Path) -> Store {
    let mut store = Store::open_at(dir).unwrap();
    let token = auth::signup(&mut store.db, "a@b.c", "secret1", None, "USD").unwrap();
    store.save().unwrap();
    store.set_session(&token).unwrap();
    store
}

#[test]
fn importer_trims_cli_path_argument_and_prepends_rows() {
    let dir = tempdir().unwrap();
    let mut store = signed_in_store(dir.path());

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,description,amount,type\n2025-02-03,Broker buy,-5.00,buy\n2025-02-04,Refund,12.00,"
    )
    .unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let padded = format!("  {}  ", path);
    let matches =
        cli::build_cli().get_matches_from(["finsan", "import", "transactions", "--path", &padded]);
    let Some(("import", import_m)) = matches.subcommand() else {
        panic!("no import subcommand");
    };
    importer::handle(&mut store, import_m).unwrap();

    let user = store.current_user().unwrap();
    assert_eq!(user.finance.transactions.len(), 2);
    // Imported batch lands at the front, in file order.
    assert_eq!(user.finance.transactions[0].description, "Broker buy");
    assert_eq!(user.finance.transactions[0].r#type, TxType::Expense);
    assert_eq!(user.finance.transactions[1].r#type, TxType::Income);

    // And it survives the round trip through the JSON file.
    let reopened = Store::open_at(dir.path()).unwrap();
    assert_eq!(reopened.current_user().unwrap().finance.transactions.len(), 2);
}

#[test]
fn import_requires_a_session() {
    let dir = tempdir().unwrap();
    let mut store = Store::open_at(dir.path()).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,amount\n2025-02-03,1").unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let matches =
        cli::build_cli().get_matches_from(["finsan", "import", "transactions", "--path", &path]);
    let Some(("import", import_m)) = matches.subcommand() else {
        panic!("no import subcommand");
    };
    assert!(importer::handle(&mut store, import_m).is_err());
}
