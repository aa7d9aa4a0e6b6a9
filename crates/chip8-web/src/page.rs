use chip8_host::startup::require;
use chip8_host::{ClickTarget, HostConfig, HostView, StartupError};
use chip8_link::catalog::RomDescriptor;
use chip8_link::reflect::{Control, PLAY_MODE_CLASS, Reflection, TOGGLE_ON_CLASS};
use log::error;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlIFrameElement, HtmlInputElement, HtmlSelectElement, Node,
};

/// Every element the host page needs, resolved once at startup
pub struct PageAnchors {
    pub frame: HtmlIFrameElement,
    pub rom_picker: HtmlSelectElement,
    pub rom_file: HtmlInputElement,
    pub cycle_rate: HtmlInputElement,
    pub reset_button: Element,
    pub legacy_shift_button: Element,
    pub legacy_jump_button: Element,
    pub legacy_store_load_button: Element,
    pub mode_button: Element,
    pub body: HtmlElement,
    pub info: RomInfoPanel,
    pub mode: ModeWidgets,
}

pub struct RomInfoPanel {
    container: Element,
    title: Element,
    blurb: Element,
    controls: Element,
}

pub struct ModeWidgets {
    label: Element,
    icon: Element,
    tooltip: Element,
}

fn by_id<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id).and_then(|el| el.dyn_into().ok())
}

fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

impl PageAnchors {
    pub fn resolve(doc: &Document, config: &HostConfig) -> Result<Self, StartupError> {
        let frame = require(
            "frame",
            &config.frame_selector,
            query(doc, &config.frame_selector).and_then(|el| el.dyn_into().ok()),
        )?;
        let mode_button: Element = require("modeButton", &config.mode_button, by_id(doc, &config.mode_button))?;

        let label_selector = format!("label[for=\"{}\"]", config.mode_button);
        let icon_selector = format!("#{} i", config.mode_button);
        let tooltip_selector = format!("#{} .tooltiptext", config.mode_button);

        Ok(Self {
            frame,
            rom_picker: require("romPicker", &config.rom_picker, by_id(doc, &config.rom_picker))?,
            rom_file: require("romFile", &config.rom_file, by_id(doc, &config.rom_file))?,
            cycle_rate: require("cycleRate", &config.cycle_rate_input, by_id(doc, &config.cycle_rate_input))?,
            reset_button: require("resetButton", &config.reset_button, by_id(doc, &config.reset_button))?,
            legacy_shift_button: require(
                "legacyShiftButton",
                &config.legacy_shift_button,
                by_id(doc, &config.legacy_shift_button),
            )?,
            legacy_jump_button: require(
                "legacyJumpButton",
                &config.legacy_jump_button,
                by_id(doc, &config.legacy_jump_button),
            )?,
            legacy_store_load_button: require(
                "legacyStoreLoadButton",
                &config.legacy_store_load_button,
                by_id(doc, &config.legacy_store_load_button),
            )?,
            body: require("body", "body", doc.body())?,
            info: RomInfoPanel {
                container: require("romInfoContainer", &config.rom_info_container, by_id(doc, &config.rom_info_container))?,
                title: require("romInfoTitle", &config.rom_info_title, by_id(doc, &config.rom_info_title))?,
                blurb: require("romInfoBlurb", &config.rom_info_blurb, by_id(doc, &config.rom_info_blurb))?,
                controls: require("romInfoControls", &config.rom_info_controls, by_id(doc, &config.rom_info_controls))?,
            },
            mode: ModeWidgets {
                label: require("modeLabel", &label_selector, query(doc, &label_selector))?,
                icon: require("modeIcon", &icon_selector, query(doc, &icon_selector))?,
                tooltip: require("modeTooltip", &tooltip_selector, query(doc, &tooltip_selector))?,
            },
            mode_button,
        })
    }
}

/// Writes reflections and ROM info into the page
pub struct PageView {
    rom_picker: HtmlSelectElement,
    legacy_shift_button: Element,
    legacy_jump_button: Element,
    legacy_store_load_button: Element,
    mode_button: Element,
    info: RomInfoPanel,
    mode: ModeWidgets,
    empty_rom_value: String,
    hidden_class: String,
}

fn set_class(el: &Element, class: &str, present: bool) {
    let classes = el.class_list();
    let result = if present { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(e) = result {
        error!("Updating class {class:?} failed: {e:?}");
    }
}

impl PageView {
    pub fn new(anchors: &PageAnchors, config: &HostConfig) -> Self {
        Self {
            rom_picker: anchors.rom_picker.clone(),
            legacy_shift_button: anchors.legacy_shift_button.clone(),
            legacy_jump_button: anchors.legacy_jump_button.clone(),
            legacy_store_load_button: anchors.legacy_store_load_button.clone(),
            mode_button: anchors.mode_button.clone(),
            info: RomInfoPanel {
                container: anchors.info.container.clone(),
                title: anchors.info.title.clone(),
                blurb: anchors.info.blurb.clone(),
                controls: anchors.info.controls.clone(),
            },
            mode: ModeWidgets {
                label: anchors.mode.label.clone(),
                icon: anchors.mode.icon.clone(),
                tooltip: anchors.mode.tooltip.clone(),
            },
            empty_rom_value: config.empty_rom_value.clone(),
            hidden_class: config.hidden_class.clone(),
        }
    }
}

impl HostView for PageView {
    fn reflect(&self, control: Control, reflection: &Reflection) {
        match reflection {
            Reflection::Mode(mode) => {
                self.mode.label.set_text_content(Some(mode.label));
                set_class(&self.mode_button, PLAY_MODE_CLASS, mode.play_mode);
                set_class(&self.mode.icon, mode.icon_remove, false);
                set_class(&self.mode.icon, mode.icon_add, true);
                self.mode.tooltip.set_text_content(Some(mode.tooltip));
            }
            Reflection::Toggle { on } => {
                let button = match control {
                    Control::LegacyShift => &self.legacy_shift_button,
                    Control::LegacyJump => &self.legacy_jump_button,
                    Control::LegacyStoreLoad => &self.legacy_store_load_button,
                    Control::Mode => &self.mode_button,
                };
                set_class(button, TOGGLE_ON_CLASS, *on);
            }
        }
    }

    fn show_rom_info(&self, rom: &RomDescriptor) {
        set_class(&self.info.container, &self.hidden_class, false);
        self.info.title.set_text_content(Some(rom.display_name));
        self.info.blurb.set_text_content(Some(rom.blurb));
        // Catalog markup is static and trusted
        self.info.controls.set_inner_html(rom.controls_markup);
    }

    fn hide_rom_info(&self) {
        set_class(&self.info.container, &self.hidden_class, true);
    }

    fn reset_rom_picker(&self) {
        self.rom_picker.set_value(&self.empty_rom_value);
    }
}

/// Classifies the element a click landed on
pub fn click_target(target: Option<EventTarget>, body: &HtmlElement, chrome_class: &str) -> ClickTarget {
    let Some(el) = target.and_then(|t| t.dyn_into::<Element>().ok()) else {
        return ClickTarget::Control;
    };
    let node: &Node = &el;
    if body.is_same_node(Some(node)) {
        ClickTarget::PageBackground
    } else if el.class_list().contains(chrome_class) {
        ClickTarget::EmptyPanel
    } else {
        ClickTarget::Control
    }
}
