use crate::lang::Error;
use std::time::Duration;

/// Host side effects requested by the device instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    MouseMove { x: u16, y: u16 },
    /// Button action code, meaning is up to the device.
    MouseButton(u16),
    MouseScroll(i16),
    Key { action: u16, code: u16 },
    Sleep(Duration),
}

/// ## Host collaborator
///
/// The runtime checks permissions before calling `dispatch`, so a device
/// only sees events the config allows. A device error stops the run.
/// Devices report failures with [`ErrorCode::DeviceError`]. An address set
/// by the device is kept, otherwise the runtime adds the instruction's.
///
/// [`ErrorCode::DeviceError`]: crate::lang::ErrorCode::DeviceError
pub trait Device {
    fn dispatch(&mut self, event: Event) -> Result<(), Error>;
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDevice;

impl Device for NullDevice {
    fn dispatch(&mut self, _event: Event) -> Result<(), Error> {
        Ok(())
    }
}

/// Records events in order.
impl Device for Vec<Event> {
    fn dispatch(&mut self, event: Event) -> Result<(), Error> {
        self.push(event);
        Ok(())
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Event::*;
        match self {
            MouseMove { x, y } => write!(f, "MOUSE MOVE {} {}", x, y),
            MouseButton(action) => write!(f, "MOUSE BUTTON {}", action),
            MouseScroll(delta) => write!(f, "MOUSE SCROLL {}", delta),
            Key { action, code } => write!(f, "KEY {} {}", action, code),
            Sleep(duration) => write!(f, "SLEEP {}MS", duration.as_millis()),
        }
    }
}
