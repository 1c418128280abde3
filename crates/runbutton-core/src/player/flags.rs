bitflags::bitflags! {
    /// Fine-grained animation and interaction flags of the player actor
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct StateFlags: u32 {
        /// Sword attack while moving forward, including sword beam release
        const MOVE_SWORD       = 0x4000_0000;
        const SHOPPING         = 0x2000_0000;
        const IDLE_ANIMATION   = 0x1000_0000;
        const OCARINA          = 0x0800_0000;
        /// Navi wants to talk
        const NAVI_C_UP        = 0x0020_0000;
        /// Navi is hovering a target
        const NAVI_HOVER       = 0x0010_0000;
        /// Jump while Z-targeting
        const Z_JUMP           = 0x0008_0000;
        const CRAWLING         = 0x0004_0000;
        /// In front of a crawlspace
        const CAN_CRAWL        = 0x0001_0000;
        const Z_TARGET         = 0x0000_2000;
        /// Attached to an enemy
        const CONNECT_TO_ENEMY = 0x0000_0080;
        /// Lying flat, e.g. in a crawlspace or knocked back
        const HORIZONTAL       = 0x0000_0040;
        /// Can talk to a sign or NPC
        const CAN_READ         = 0x0000_0002;
        /// Standing idle has no bit of its own; never intersects anything
        const IDLE_STANDING    = 0;
    }
}

impl StateFlags {
    /// Flags that block the run boost
    pub const DENY: Self = Self::IDLE_STANDING
        .union(Self::IDLE_ANIMATION)
        .union(Self::Z_JUMP)
        .union(Self::CRAWLING)
        .union(Self::CONNECT_TO_ENEMY)
        .union(Self::HORIZONTAL);

    pub fn from_raw(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }

    pub fn blocks_run(&self) -> bool {
        self.intersects(Self::DENY)
    }
}
