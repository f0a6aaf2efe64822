//! Application layer of the settings store.
//!
//! - **`settings_store`** – The `SettingsStore` use case: load with
//!   missing/corrupt file recovery, save with the save-failure policy, and the
//!   accessors around the live settings record.
//!
//! Policy decisions live here; every file operation is delegated to
//! `infrastructure::storage`.

pub mod settings_store;
