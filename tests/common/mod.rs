#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};

pub const BIN_NAME: &str = "spendboard_cli";

pub const PURCHASES: &str = r#"[
    {"id": "P1", "buyer_nome": "Alice", "created_date": "2024-03-10"},
    {"id": "P2", "buyer_nome": "Bruno", "created_date": "2024-07-21T14:00:00Z"}
]"#;

pub const ITEMS: &str = r#"[
    {"id": "I1", "purchase_id": "P1", "supplier_id": "S1", "supplier_nome": "Acme", "material_id": "M1", "preco_total": 100, "saving_reais": 20},
    {"id": "I2", "purchase_id": "P2", "supplier_id": "S2", "supplier_nome": "Globex", "material_id": "M2", "preco_total": 40, "saving_reais": 5},
    {"id": "I3", "purchase_id": "P404", "supplier_nome": "Initech", "material_id": "M3", "preco_total": 7}
]"#;

/// Temporary home for configuration plus a snapshot directory with fixtures.
pub struct Workspace {
    pub home: TempDir,
    pub snapshot: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let home = TempDir::new().expect("create home dir");
        let snapshot = TempDir::new().expect("create snapshot dir");
        snapshot
            .child("purchases.json")
            .write_str(PURCHASES)
            .expect("write purchases");
        snapshot
            .child("items.json")
            .write_str(ITEMS)
            .expect("write items");
        Self { home, snapshot }
    }

    pub fn snapshot_dir(&self) -> String {
        self.snapshot.path().display().to_string()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
        cmd.env("SPENDBOARD_HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("SPENDBOARD_CLI_SCRIPT")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn script(&self) -> Command {
        let mut cmd = self.command();
        cmd.env("SPENDBOARD_CLI_SCRIPT", "1");
        cmd
    }
}
