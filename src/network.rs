// The particle network: a fixed set of drifting particles, joined by faint
// lines whenever two of them come close enough to each other.

extern crate nalgebra_glm as glm;

use crate::color::Color;
use crate::particle::Particle;
use crate::surface::DrawingSurface;
use rand::Rng;

pub struct ParticleNetwork {
    particles: Vec<Particle>,
}

impl ParticleNetwork {
    pub const MAX_PARTICLES: usize = 50;
    pub const PIXELS_PER_PARTICLE: u32 = 20;

    pub const LINK_DISTANCE: f64 = 150.0;
    pub const LINK_MAX_ALPHA: f64 = 0.3;
    pub const LINK_LINE_WIDTH: f64 = 1.0;

    pub fn link_color() -> Color {
        Color::rgba(0, 255, 255, 0.15)
    }

    // Painted over the previous frame instead of clearing it, so moving
    // particles leave fading trails.
    pub fn trail_color() -> Color {
        Color::rgba(10, 14, 39, 0.1)
    }

    pub fn particle_count(width: u32) -> usize {
        ((width / ParticleNetwork::PIXELS_PER_PARTICLE) as usize).min(ParticleNetwork::MAX_PARTICLES)
    }

    pub fn new<R: Rng>(width: u32, height: u32, rng: &mut R) -> ParticleNetwork {
        let count = ParticleNetwork::particle_count(width);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::random(rng, width as f64, height as f64));
        }
        ParticleNetwork { particles }
    }

    pub fn from_particles(particles: Vec<Particle>) -> ParticleNetwork {
        ParticleNetwork { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn update(&mut self, width: f64, height: f64) {
        for particle in &mut self.particles {
            particle.update([width, height]);
        }
    }

    // One frame. Dimensions are read from the surface every time so a resize
    // between frames takes effect on the next step.
    pub fn step<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) {
        let width = surface.width() as f64;
        let height = surface.height() as f64;

        surface.set_fill_color(ParticleNetwork::trail_color());
        surface.fill_rect(0.0, 0.0, width, height);

        self.update(width, height);
        for particle in &self.particles {
            particle.draw(surface);
        }
        self.draw_links(surface);
    }

    fn draw_links<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_stroke_color(ParticleNetwork::link_color());
        surface.set_line_width(ParticleNetwork::LINK_LINE_WIDTH);

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = glm::distance(&glm::vec2(a.pos[0], a.pos[1]), &glm::vec2(b.pos[0], b.pos[1]));
                if let Some(alpha) = link_alpha(distance) {
                    surface.set_global_alpha(alpha);
                    surface.stroke_line(a.pos, b.pos);
                }
            }
        }

        surface.set_global_alpha(1.0);
    }
}

// Fades linearly from LINK_MAX_ALPHA at distance 0 down to 0 at LINK_DISTANCE
pub fn link_opacity(distance: f64) -> f64 {
    let fade = (ParticleNetwork::LINK_DISTANCE - distance) / ParticleNetwork::LINK_DISTANCE;
    fade.max(0.0) * ParticleNetwork::LINK_MAX_ALPHA
}

// None when the pair is too far apart to be linked at all
pub fn link_alpha(distance: f64) -> Option<f64> {
    if distance < ParticleNetwork::LINK_DISTANCE {
        Some(link_opacity(distance))
    } else {
        None
    }
}
