//! Player body: a point-radius disc riding a heightfield
//!
//! Horizontal speed is driven by the slope under the player, vertical speed
//! by gravity. Contact is a single point-vs-heightfield test per update.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::settings::PlayerParams;
use crate::wrap_degrees;

/// Ground contact state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    Grounded,
    Airborne,
}

/// Contact change produced by a single update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Jump impulse applied this update
    Jumped,
    /// Touched down after being airborne
    Landed,
    /// Lost contact without jumping (went over a crest)
    LeftGround,
}

/// Per-frame button state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Buttons {
    /// Held this frame
    pub down: bool,
    /// Went down this frame (edge)
    pub pressed: bool,
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: DVec2,
    pub vel: DVec2,
    pub contact: Contact,
    /// Cosmetic spin, degrees in [0, 360)
    pub angle_deg: f64,
    params: PlayerParams,
}

impl Player {
    pub fn new(pos: DVec2, params: PlayerParams) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            contact: Contact::Airborne,
            angle_deg: 0.0,
            params,
        }
    }

    pub fn params(&self) -> &PlayerParams {
        &self.params
    }

    pub fn radius(&self) -> f64 {
        self.params.radius
    }

    pub fn on_ground(&self) -> bool {
        self.contact == Contact::Grounded
    }

    /// Advance the body by `dt` seconds against the given ground
    ///
    /// `height` and `slope` are the surface y and dy/dx at a world x.
    pub fn update<H, S>(&mut self, dt: f64, buttons: Buttons, height: H, slope: S) -> Option<Transition>
    where
        H: Fn(f64) -> f64,
        S: Fn(f64) -> f64,
    {
        let p = self.params;
        let was = self.contact;

        self.vel.x += p.slope_accel * slope(self.pos.x) * dt;
        // max_speed comes from settings and may be negative or NaN
        if self.vel.x.abs() > p.max_speed {
            self.vel.x = p.max_speed.copysign(self.vel.x);
        }
        if self.vel.x < p.min_forward_speed {
            self.vel.x = p.min_forward_speed;
        }

        self.vel.y += p.gravity * dt;
        self.pos += self.vel * dt;

        let ground_y = height(self.pos.x) - p.radius;
        if self.pos.y >= ground_y {
            self.pos.y = ground_y;
            self.vel.y = 0.0;
            self.contact = Contact::Grounded;
        } else {
            self.contact = Contact::Airborne;
        }

        let jumped = buttons.pressed && self.jump();

        match self.contact {
            Contact::Airborne if buttons.down => {
                self.angle_deg = wrap_degrees(self.angle_deg + p.rotate_speed_deg * dt);
            }
            Contact::Grounded => self.angle_deg = 0.0,
            Contact::Airborne => {}
        }

        match (was, self.contact) {
            _ if jumped => Some(Transition::Jumped),
            (Contact::Airborne, Contact::Grounded) => Some(Transition::Landed),
            (Contact::Grounded, Contact::Airborne) => Some(Transition::LeftGround),
            _ => None,
        }
    }

    /// Apply the jump impulse if grounded; returns whether it fired
    pub fn jump(&mut self) -> bool {
        if self.contact != Contact::Grounded {
            return false;
        }
        self.vel.y = -self.params.jump_speed;
        self.contact = Contact::Airborne;
        true
    }
}
