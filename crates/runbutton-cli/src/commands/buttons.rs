//! Buttons command implementation.

use anyhow::Result;
use runbutton_core::Button;
use strum::IntoEnumIterator;

/// Run the buttons command
pub fn run() -> Result<()> {
    println!("Hold START plus one of these to rebind run:");
    println!();
    println!("Priority  Button    Mask");
    for (priority, button) in Button::iter().enumerate() {
        println!(
            "{:>8}  {:<8}  0x{:04X}",
            priority + 1,
            button.name(),
            button.mask().bits()
        );
    }

    Ok(())
}
