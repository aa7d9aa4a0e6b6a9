use chip8_link::catalog::RomDescriptor;
use chip8_link::reflect::{Control, Reflection};

/// The parts of the host page the dispatcher writes to
pub trait HostView {
    fn reflect(&self, control: Control, reflection: &Reflection);

    fn show_rom_info(&self, rom: &RomDescriptor);

    fn hide_rom_info(&self);

    /// Put the picker back on its neutral entry so the same ROM can be picked again
    fn reset_rom_picker(&self);
}

impl<T: HostView + ?Sized> HostView for std::rc::Rc<T> {
    fn reflect(&self, control: Control, reflection: &Reflection) {
        (**self).reflect(control, reflection)
    }

    fn show_rom_info(&self, rom: &RomDescriptor) {
        (**self).show_rom_info(rom)
    }

    fn hide_rom_info(&self) {
        (**self).hide_rom_info()
    }

    fn reset_rom_picker(&self) {
        (**self).reset_rom_picker()
    }
}
