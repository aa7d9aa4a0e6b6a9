use crate::dispatcher::Dispatcher;
use crate::error::ResolveError;
use crate::runtime::RuntimeTarget;
use crate::view::HostView;
use chip8_link::catalog;
use log::{error, info, warn};

pub struct RomResponse {
    pub status: u16,
    pub status_text: String,
    /// Only read when the status is a success
    pub body: Vec<u8>,
}

impl RomResponse {
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            status_text: "OK".into(),
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[allow(async_fn_in_trait)]
pub trait RomFetcher {
    /// Errors are transport failures only; HTTP error statuses come back as responses
    async fn fetch(&self, url: &str) -> anyhow::Result<RomResponse>;
}

/// A file the user picked from disk
#[allow(async_fn_in_trait)]
pub trait RomFile {
    fn name(&self) -> String;

    async fn read_bytes(&self) -> anyhow::Result<Vec<u8>>;
}

impl<R: RuntimeTarget, V: HostView> Dispatcher<R, V> {
    /// Fetch a catalog ROM by key and hand it to the runtime.
    ///
    /// Any failure leaves the running program and the info panel as they were.
    pub async fn load_catalog_rom<F: RomFetcher>(&self, key: &str, fetcher: &F) {
        if !self.is_ready() || key.is_empty() || key == self.config.empty_rom_value {
            return;
        }

        // Catalog keys are exactly the fetchable resources
        if catalog::lookup(key).is_none() {
            warn!("Unknown ROM {key:?}");
            self.view.hide_rom_info();
            return;
        }

        let bytes = match self.fetch_catalog_rom(key, fetcher).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Error loading ROM: {e}");
                return;
            }
        };

        if self.load_rom(bytes) {
            self.show_rom_info(key);
            self.view.reset_rom_picker();
        }
    }

    /// Read a user-supplied file and hand it to the runtime.
    ///
    /// A failed read is logged and otherwise ignored; the previous program
    /// keeps running.
    pub async fn load_local_file<F: RomFile>(&self, file: Option<F>) {
        if !self.is_ready() {
            return;
        }
        let Some(file) = file else {
            return;
        };

        let name = file.name();
        let bytes = match file.read_bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("{}", ResolveError::read(&name, e));
                return;
            }
        };

        info!("Read {name:?} ({} bytes)", bytes.len());
        if self.load_rom(bytes) {
            self.view.reset_rom_picker();
        }
    }

    /// Title, blurb and controls for `key`; hides the panel for keys outside the catalog
    pub fn show_rom_info(&self, key: &str) {
        match catalog::lookup(key) {
            Some(rom) => self.view.show_rom_info(rom),
            None => self.view.hide_rom_info(),
        }
    }

    async fn fetch_catalog_rom<F: RomFetcher>(
        &self,
        key: &str,
        fetcher: &F,
    ) -> Result<Vec<u8>, ResolveError> {
        let url = catalog::rom_url(&self.config.rom_base, key);
        let response = fetcher
            .fetch(&url)
            .await
            .map_err(|e| ResolveError::fetch(key, e))?;

        if !response.is_success() {
            return Err(ResolveError::Status {
                key: key.to_string(),
                status: response.status,
                status_text: response.status_text,
            });
        }
        Ok(response.body)
    }
}
