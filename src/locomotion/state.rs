//! Locomotion domain: the contact and jump state machine for one character.
//!
//! The machine is pure data plus transition functions so the lockout and
//! priority-chain rules can be tested without an `App` or a physics world.
//! Surface contact events feed in through [`LocomotionState::surface_stay`]
//! and [`LocomotionState::surface_exit`]; jump presses resolve through
//! [`LocomotionState::try_jump`].

/// Tag carried by every solid surface a character can touch.
///
/// Parsed once from level data; comparison is case-insensitive at the
/// parsing boundary so `"Ground"`, `"ground"` and `"GROUND"` are the same
/// surface kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceTag {
    Ground,
    Wall,
    Platform,
}

impl SurfaceTag {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "ground" => Some(Self::Ground),
            "wall" => Some(Self::Wall),
            "platform" => Some(Self::Platform),
            _ => None,
        }
    }
}

/// What currently supports the character.
///
/// `grant` is a standing permission to jump (platform contact, wall grant,
/// or the residue of ground contact until the exit event lands);
/// `wall_locked` records that a wall-granted jump was already spent this
/// airborne excursion. The lock only exists while airborne -- regaining
/// ground or platform support clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    Grounded,
    Airborne { grant: bool, wall_locked: bool },
}

/// Conceptual phase of the machine, derived from [`Support`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPhase {
    Grounded,
    AirborneWithGrant,
    AirborneNoGrant,
    WallLocked,
}

/// Which branch of the priority chain fired for a jump press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Branch 1: standing on confirmed ground.
    Ground,
    /// Branch 2: a standing grant (platform contact or wall grant).
    Granted,
    /// Branch 3: one unit of the extra-jump budget.
    Extra,
}

/// The jump capabilities a character was configured with.
#[derive(Debug, Clone, Copy)]
pub struct JumpRules {
    pub wall_jump: bool,
    pub double_jump: bool,
    /// Extra jumps granted per grounded/platform touch when double jump
    /// is enabled.
    pub extra_jumps: u8,
}

/// Per-character machine state: support plus the remaining extra-jump
/// budget for the current airborne excursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocomotionState {
    support: Support,
    extra_jumps: u8,
}

impl LocomotionState {
    /// State of a freshly enabled character: grounded, full budget.
    pub fn spawned(rules: &JumpRules) -> Self {
        Self {
            support: Support::Grounded,
            extra_jumps: rules.extra_jumps,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.support == Support::Grounded
    }

    /// Whether a jump action is currently permitted without spending the
    /// extra-jump budget.
    pub fn has_jump_remaining(&self) -> bool {
        match self.support {
            Support::Grounded => true,
            Support::Airborne { grant, .. } => grant,
        }
    }

    /// Whether the one wall jump of this excursion was already consumed.
    pub fn has_used_wall_jump(&self) -> bool {
        matches!(
            self.support,
            Support::Airborne {
                wall_locked: true,
                ..
            }
        )
    }

    pub fn extra_jumps(&self) -> u8 {
        self.extra_jumps
    }

    pub fn phase(&self) -> JumpPhase {
        match self.support {
            Support::Grounded => JumpPhase::Grounded,
            Support::Airborne { grant: true, .. } => JumpPhase::AirborneWithGrant,
            Support::Airborne {
                grant: false,
                wall_locked: false,
            } => JumpPhase::AirborneNoGrant,
            Support::Airborne {
                grant: false,
                wall_locked: true,
            } => JumpPhase::WallLocked,
        }
    }

    /// A surface of the given tag is still in contact this step.
    ///
    /// `probe_hit` is the ground-probe overlap result for this step; it
    /// gates ground and platform support (touching is not the same as
    /// being load-bearing) and is ignored for walls.
    pub fn surface_stay(&mut self, tag: SurfaceTag, probe_hit: bool, rules: &JumpRules) {
        match tag {
            SurfaceTag::Ground => {
                if probe_hit {
                    self.support = Support::Grounded;
                    if rules.double_jump {
                        self.extra_jumps = rules.extra_jumps;
                    }
                }
            }
            SurfaceTag::Platform => {
                if probe_hit {
                    if !self.is_grounded() {
                        self.support = Support::Airborne {
                            grant: true,
                            wall_locked: false,
                        };
                    }
                    if rules.double_jump {
                        self.extra_jumps = rules.extra_jumps;
                    }
                }
            }
            SurfaceTag::Wall => {
                // One wall grant per excursion, only while airborne with
                // nothing else to jump from. A wall grant forfeits the
                // remaining extra-jump budget.
                if rules.wall_jump && self.phase() == JumpPhase::AirborneNoGrant {
                    self.support = Support::Airborne {
                        grant: true,
                        wall_locked: true,
                    };
                    self.extra_jumps = 0;
                }
            }
        }
    }

    /// Contact with a surface of the given tag ended.
    pub fn surface_exit(&mut self, tag: SurfaceTag, rules: &JumpRules) {
        match tag {
            SurfaceTag::Ground => {
                self.support = Support::Airborne {
                    grant: false,
                    wall_locked: self.has_used_wall_jump(),
                };
            }
            SurfaceTag::Wall => {
                if rules.wall_jump {
                    if let Support::Airborne { wall_locked, .. } = self.support {
                        self.support = Support::Airborne {
                            grant: false,
                            wall_locked,
                        };
                    }
                }
            }
            SurfaceTag::Platform => {
                if let Support::Airborne { .. } = self.support {
                    self.support = Support::Airborne {
                        grant: false,
                        wall_locked: false,
                    };
                }
            }
        }
    }

    /// Resolve one jump press against the priority chain: ground, then
    /// standing grant, then extra-jump budget. At most one branch fires.
    ///
    /// Performing any jump locks the wall grant for the rest of the
    /// excursion and drops grounded support; standing grants are only
    /// revoked by the matching exit event, as with real contacts.
    pub fn try_jump(&mut self) -> Option<JumpKind> {
        match self.support {
            Support::Grounded => {
                self.support = Support::Airborne {
                    grant: true,
                    wall_locked: true,
                };
                Some(JumpKind::Ground)
            }
            Support::Airborne { grant: true, .. } => {
                self.support = Support::Airborne {
                    grant: true,
                    wall_locked: true,
                };
                Some(JumpKind::Granted)
            }
            Support::Airborne { grant: false, .. } if self.extra_jumps > 0 => {
                self.extra_jumps -= 1;
                self.support = Support::Airborne {
                    grant: false,
                    wall_locked: true,
                };
                Some(JumpKind::Extra)
            }
            _ => None,
        }
    }
}
