use serde::Deserialize;

/// Where things live on the host page.
///
/// Every field has a default matching the stock `index.html`, so an empty
/// (or absent) config object is valid.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostConfig {
    /// Prefix catalog keys are appended to when fetching ROMs
    pub rom_base: String,
    /// Picker value meaning "nothing selected"
    pub empty_rom_value: String,

    /// When set, the frame is pointed here only after the readiness listener
    /// is installed, so the runtime's signal can't be missed
    pub frame_src: Option<String>,

    // Anchors
    pub frame_selector: String,
    pub rom_picker: String,
    pub rom_file: String,
    pub rom_info_container: String,
    pub rom_info_title: String,
    pub rom_info_blurb: String,
    pub rom_info_controls: String,
    pub reset_button: String,
    pub legacy_shift_button: String,
    pub legacy_jump_button: String,
    pub legacy_store_load_button: String,
    pub mode_button: String,
    pub cycle_rate_input: String,

    /// Class marking empty control-panel regions that hand focus back to the runtime
    pub chrome_class: String,
    /// Class hiding the ROM info panel
    pub hidden_class: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            rom_base: "/roms/".into(),
            empty_rom_value: "empty".into(),

            frame_src: None,
            frame_selector: "iframe".into(),
            rom_picker: "rom-picker".into(),
            rom_file: "rom-file".into(),
            rom_info_container: "rom-info-container".into(),
            rom_info_title: "rom-info-title".into(),
            rom_info_blurb: "rom-info-blurb".into(),
            rom_info_controls: "rom-info-controls".into(),
            reset_button: "reset-btn".into(),
            legacy_shift_button: "legacy-shift-btn".into(),
            legacy_jump_button: "legacy-jump-btn".into(),
            legacy_store_load_button: "legacy-store-load-btn".into(),
            mode_button: "pause-step-btn".into(),
            cycle_rate_input: "cycle-rate".into(),

            chrome_class: "sidebar".into(),
            hidden_class: "hidden".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: HostConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.rom_base, "/roms/");
        assert_eq!(config.empty_rom_value, "empty");
    }

    #[test]
    fn test_partial_override() {
        let config: HostConfig =
            serde_json::from_str(r#"{"romBase":"/static/c8/","modeButton":"mode"}"#).unwrap();
        assert_eq!(config.rom_base, "/static/c8/");
        assert_eq!(config.mode_button, "mode");
        assert_eq!(config.rom_picker, "rom-picker");
        assert_eq!(config.frame_src, None);
    }

    #[test]
    fn test_frame_src() {
        let config: HostConfig = serde_json::from_str(r#"{"frameSrc":"emulator.html"}"#).unwrap();
        assert_eq!(config.frame_src.as_deref(), Some("emulator.html"));
    }
}
