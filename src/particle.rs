// Simple particle struct to keep track of individual position, velocity, size and color

use crate::color::Color;
use crate::surface::DrawingSurface;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub const MAX_SPEED: f64 = 1.0;
    pub const MIN_RADIUS: f64 = 1.0;
    pub const MAX_RADIUS: f64 = 3.0;

    // Halo ring drawn around each particle
    pub const GLOW_SCALE: f64 = 3.0;
    pub const GLOW_ALPHA: f64 = 0.5;
    pub const GLOW_LINE_WIDTH: f64 = 0.5;

    pub const PALETTE: [Color; 4] = [
        Color::from_u32(0x00ffffff),
        Color::from_u32(0x0066ffff),
        Color::from_u32(0x39ff14ff),
        Color::from_u32(0xaa00ffff),
    ];

    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // Random position inside the surface, random heading and size, palette color
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = rng.gen_range(-Particle::MAX_SPEED, Particle::MAX_SPEED);
        let vel_y = rng.gen_range(-Particle::MAX_SPEED, Particle::MAX_SPEED);
        let radius = rng.gen_range(Particle::MIN_RADIUS, Particle::MAX_RADIUS);
        let color = Particle::PALETTE[rng.gen_range(0, Particle::PALETTE.len())];
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color)
    }

    // Moves one frame's worth of velocity, bounces off the walls, and
    // leaves the particle inside [0, bounds] on both axes.
    pub fn update(&mut self, bounds: Vector2<f64>) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        for axis in 0..2 {
            if self.pos[axis] < 0.0 || self.pos[axis] > bounds[axis] {
                self.vel[axis] *= -1.0;
            }
            self.pos[axis] = self.pos[axis].max(0.0).min(bounds[axis]);
        }
    }

    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_fill_color(self.color);
        surface.fill_circle(self.pos, self.radius);

        surface.set_stroke_color(self.color);
        surface.set_line_width(Particle::GLOW_LINE_WIDTH);
        surface.set_global_alpha(Particle::GLOW_ALPHA);
        surface.stroke_circle(self.pos, self.radius * Particle::GLOW_SCALE);
        surface.set_global_alpha(1.0);
    }
}
