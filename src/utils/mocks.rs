#[cfg(test)]
pub mod mockutils {
    use std::{sync::Arc, time::Duration};

    use soroban_rs::xdr::{Operation, OperationBody, TransactionEnvelope};

    use crate::{
        config::{ServerConfig, StorageMode},
        domain::transaction::build_transaction,
        models::{AccountSnapshot, AppState, Keypair},
        repositories::{AssetRepository, NetworkRepository, Storage},
    };

    pub const TEST_SECRET_KEY: &str = "SAAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQC5MY";
    pub const TEST_PUBLIC_KEY: &str = "GCFIRY65OQE7DFP5KLNS2PF2LVZMUZYJX4OZIEQ36N2IQANUB5XVYOJR";
    pub const TEST_SECRET_KEY_2: &str = "SABAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAFNE7";
    pub const TEST_PUBLIC_KEY_2: &str = "GCATS5YOVB6ROX2WUNKGNQ2MP3GMXDMKSG2O4N5CLX3A6W4PZGZZI55U";

    pub fn test_keypair() -> Keypair {
        Keypair::from_secret(TEST_SECRET_KEY).unwrap()
    }

    pub fn mock_account(id: &str) -> AccountSnapshot {
        AccountSnapshot::new(id, 1_000)
    }

    pub fn create_test_operation() -> Operation {
        Operation {
            source_account: None,
            body: OperationBody::EndSponsoringFutureReserves,
        }
    }

    /// Unsigned envelope from [`TEST_PUBLIC_KEY`] holding one operation.
    pub fn create_test_envelope() -> TransactionEnvelope {
        let tx = build_transaction(&mock_account(TEST_PUBLIC_KEY), vec![create_test_operation()])
            .unwrap();
        TransactionEnvelope::Tx(soroban_rs::xdr::TransactionV1Envelope {
            tx,
            signatures: Default::default(),
        })
    }

    pub fn create_test_server_config(storage_mode: StorageMode) -> ServerConfig {
        ServerConfig {
            host: "localhost".to_string(),
            port: 8080,
            storage_mode,
            storage_path: "./data/test-storage.json".to_string(),
            horizon_timeout: Duration::from_secs(5),
            default_network: None,
        }
    }

    pub fn create_mock_app_state() -> AppState {
        let storage = Arc::new(Storage::new_in_memory());
        AppState {
            network_repository: Arc::new(NetworkRepository::new(storage.clone())),
            asset_repository: Arc::new(AssetRepository::new(storage)),
            horizon_timeout: Duration::from_secs(5),
        }
    }
}
