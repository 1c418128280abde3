//! Run button controller
//!
//! Once per emulated frame the controller either rebinds the run button
//! (modifier held together with a bindable button) or decides whether the
//! player gets a run boost this frame:
//!
//! 1. The coarse movement mode must be on the gate's allow-list, and with the
//!    extended gate the fine-grained state word must carry no deny flag.
//! 2. The bound button must be held.
//! 3. Position is nudged by a fraction of the current velocity.
//!
//! Memory failures never abort a tick. A failed read counts as zero and a
//! failed write is dropped, matching what the host does for bad addresses.

use tracing::{debug, trace, warn};

use crate::config::RunButtonConfig;
use crate::error::MemoryError;
use crate::host::{GLOBAL_CONTEXT_POINTER, GlobalSlots, Host, Plugin};
use crate::input::{Button, Buttons};
use crate::memory::layout::{context, player};
use crate::player::{Movement, StateFlags, Vec3, boosted_position};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Modifier held with a bindable button; the binding now points at it
    Rebound(Button),
    /// Character state does not allow running
    StateBlocked {
        movement: Movement,
        flags: StateFlags,
    },
    /// State allows running but the bound button is not held
    NotHeld,
    /// Position was advanced
    Boosted { from: Vec3, to: Vec3 },
}

pub struct RunButtonController {
    config: RunButtonConfig,
    binding: Button,
    global_context: Option<u32>,
}

impl RunButtonController {
    pub fn new(config: RunButtonConfig) -> Self {
        let binding = config.default_button;
        Self {
            config,
            binding,
            global_context: None,
        }
    }

    /// Button currently bound to run
    pub fn binding(&self) -> Button {
        self.binding
    }

    /// Captured global context pointer, or 0 before capture
    pub fn global_context(&self) -> u32 {
        self.global_context.unwrap_or(0)
    }

    /// Restore the configured default binding
    pub fn reset_binding(&mut self) {
        self.binding = self.config.default_button;
    }

    /// Capture the global context pointer from the host's global slots.
    ///
    /// Only the first call has an effect. A missing slot is not an error;
    /// the pointer stays 0 and every later read resolves against it.
    pub fn capture_global_context(&mut self, globals: &dyn GlobalSlots) {
        if let Some(existing) = self.global_context {
            warn!(
                "Global context pointer already captured ({:#010x}), ignoring",
                existing
            );
            return;
        }

        let pointer = globals.slot(GLOBAL_CONTEXT_POINTER).unwrap_or_else(|| {
            debug!("Global context pointer not populated yet, using 0");
            0
        });
        debug!("Captured global context pointer: {:#010x}", pointer);
        self.global_context = Some(pointer);
    }

    /// Run one frame of rebind / boost logic
    pub fn tick<H: Host + ?Sized>(&mut self, host: &mut H) -> TickOutcome {
        let held = Buttons::from_raw(or_zero(
            host.read_ptr_u16(self.global_context(), context::INPUT_BUTTONS),
            "input buttons",
        ));

        // Modifier alone falls through to the boost logic
        if held.contains(Buttons::MODIFIER)
            && let Some(button) = held.first_bindable()
        {
            if button != self.binding {
                debug!("Run button rebound: {} -> {}", self.binding, button);
            }
            self.binding = button;
            return TickOutcome::Rebound(button);
        }

        let actor = self.config.player_actor;
        let gate = self.config.state_gate;
        let movement = host.movement();
        let flags = if gate.reads_flags() {
            let raw = or_zero(
                host.read_u32(actor.wrapping_add(player::STATE_FLAGS)),
                "state flags",
            );
            trace!("State flags: {:08x}", raw);
            StateFlags::from_raw(raw)
        } else {
            StateFlags::empty()
        };

        if !gate.allows(movement, flags) {
            return TickOutcome::StateBlocked { movement, flags };
        }

        if !held.is_held(self.binding) {
            return TickOutcome::NotHeld;
        }

        let velocity = read_vec3(host, actor, [player::VEL_X, player::VEL_Y, player::VEL_Z]);
        let position = read_vec3(host, actor, [player::POS_X, player::POS_Y, player::POS_Z]);
        let next = boosted_position(position, velocity);

        write_f32(host, actor.wrapping_add(player::POS_X), next.x);
        write_f32(host, actor.wrapping_add(player::POS_Y), next.y);
        write_f32(host, actor.wrapping_add(player::POS_Z), next.z);

        trace!("Boosted {}: {:?} -> {:?}", self.binding, position, next);

        TickOutcome::Boosted {
            from: position,
            to: next,
        }
    }
}

impl Default for RunButtonController {
    fn default() -> Self {
        Self::new(RunButtonConfig::default())
    }
}

impl Plugin for RunButtonController {
    fn name(&self) -> &'static str {
        "RunButton"
    }

    fn init(&mut self) {
        self.reset_binding();
        debug!("Run button bound to {}", self.binding);
    }

    fn postinit(&mut self, globals: &dyn GlobalSlots) {
        self.capture_global_context(globals);
    }

    fn on_tick(&mut self, host: &mut dyn Host) {
        self.tick(host);
    }

    fn on_inject_finished(&mut self) {
        debug!("Core injection finished");
    }
}

fn or_zero<T: Default>(result: Result<T, MemoryError>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        trace!("Reading {} failed: {}", what, e);
        T::default()
    })
}

fn read_vec3<H: Host + ?Sized>(host: &H, base: u32, offsets: [u32; 3]) -> Vec3 {
    let [x, y, z] =
        offsets.map(|offset| or_zero(host.read_f32(base.wrapping_add(offset)), "kinematics"));
    Vec3 { x, y, z }
}

fn write_f32<H: Host + ?Sized>(host: &mut H, address: u32, value: f32) {
    if let Err(e) = host.write_f32(address, value) {
        trace!("Writing position failed: {}", e);
    }
}
