use crate::messenger::js_err;
use anyhow::{Context, anyhow};
use chip8_host::{RomFetcher, RomFile, RomResponse};
use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Response, Window};

pub struct HttpFetcher {
    window: Window,
}

impl HttpFetcher {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl RomFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> anyhow::Result<RomResponse> {
        let response: Response = JsFuture::from(self.window.fetch_with_str(url))
            .await
            .map_err(js_err)
            .with_context(|| format!("GET {url}"))?
            .dyn_into()
            .map_err(|_| anyhow!("fetch did not resolve to a Response"))?;

        // The body is only read for successful responses
        let body = if response.ok() {
            let buffer = JsFuture::from(response.array_buffer().map_err(js_err)?)
                .await
                .map_err(js_err)
                .context("Reading response body")?;
            Uint8Array::new(&buffer).to_vec()
        } else {
            Vec::new()
        };

        Ok(RomResponse {
            status: response.status(),
            status_text: response.status_text(),
            body,
        })
    }
}

/// A file from the ROM file input
pub struct PickedFile(pub File);

impl RomFile for PickedFile {
    fn name(&self) -> String {
        self.0.name()
    }

    async fn read_bytes(&self) -> anyhow::Result<Vec<u8>> {
        let buffer = JsFuture::from(self.0.array_buffer())
            .await
            .map_err(js_err)?;
        Ok(Uint8Array::new(&buffer).to_vec())
    }
}
