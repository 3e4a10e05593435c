use cgmath::{InnerSpace, Vector2};
use rayon::prelude::*;

use crate::color::{Rgb, link_color, pointer_link_color, type_color};
use crate::config::Config;
use crate::forces::{ForceMatrix, scalar_force};
use crate::input::PointerState;
use crate::particle::Particle;

/// Drawing primitives the simulation needs from its host.
pub trait Surface {
    fn clear(&mut self);
    fn draw_line(&mut self, from: Vector2<f32>, to: Vector2<f32>, color: Rgb);
    fn draw_filled_circle(&mut self, center: Vector2<f32>, radius: f32, color: Rgb);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Vector2<f32>,
    pub to: Vector2<f32>,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub links: usize,
    pub pointer_links: usize,
}

/// Links between every pair closer than `max_line_distance`, in `(i, j)` order.
pub fn particle_links(particles: &[Particle], matrix: &ForceMatrix, config: &Config) -> Vec<Link> {
    particles
        .par_iter()
        .enumerate()
        .flat_map_iter(move |(i, a)| {
            particles[i + 1..].iter().filter_map(move |b| {
                let distance = (b.position - a.position).magnitude();
                if distance < config.max_line_distance {
                    let force = scalar_force(a, b, matrix, config);
                    Some(Link {
                        from: a.position,
                        to: b.position,
                        color: link_color(force, config),
                    })
                } else {
                    None
                }
            })
        })
        .collect()
}

/// Links from the pointer to every particle within `mouse_radius`.
pub fn pointer_links(particles: &[Particle], pointer: PointerState, config: &Config) -> Vec<Link> {
    let Some(pointer) = pointer else {
        return Vec::new();
    };

    particles
        .iter()
        .filter_map(|particle| {
            let distance = (particle.position - pointer).magnitude();
            // a zero-length link has no visible extent and no finite color
            if distance < config.mouse_radius && distance > 0.0 {
                Some(Link {
                    from: pointer,
                    to: particle.position,
                    color: pointer_link_color(config.mouse_force / distance, config),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Draws links, then pointer links, then particle glyphs on top.
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    particles: &[Particle],
    matrix: &ForceMatrix,
    pointer: PointerState,
    config: &Config,
) -> RenderStats {
    let links = particle_links(particles, matrix, config);
    for link in &links {
        surface.draw_line(link.from, link.to, link.color);
    }

    let pointer_links = pointer_links(particles, pointer, config);
    for link in &pointer_links {
        surface.draw_line(link.from, link.to, link.color);
    }

    for particle in particles {
        surface.draw_filled_circle(particle.position, config.particle_size, type_color(particle.kind));
    }

    RenderStats {
        links: links.len(),
        pointer_links: pointer_links.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::{ParticleType, TYPE_COUNT};

    #[derive(Debug, PartialEq)]
    enum Command {
        Line(Vector2<f32>, Vector2<f32>, Rgb),
        Circle(Vector2<f32>, Rgb),
    }

    #[derive(Default)]
    struct Recorder(Vec<Command>);

    impl Surface for Recorder {
        fn clear(&mut self) {
            self.0.clear();
        }

        fn draw_line(&mut self, from: Vector2<f32>, to: Vector2<f32>, color: Rgb) {
            self.0.push(Command::Line(from, to, color));
        }

        fn draw_filled_circle(&mut self, center: Vector2<f32>, _radius: f32, color: Rgb) {
            self.0.push(Command::Circle(center, color));
        }
    }

    fn sample() -> Vec<Particle> {
        vec![
            Particle::new(ParticleType::Red, 100.0, 100.0),
            Particle::new(ParticleType::Green, 120.0, 100.0),
            Particle::new(ParticleType::Blue, 300.0, 300.0),
            Particle::new(ParticleType::Yellow, 130.0, 100.0),
        ]
    }

    #[test]
    fn links_follow_pair_order() {
        let config = Config::default();
        let matrix = ForceMatrix::from_rows([[0.0; TYPE_COUNT]; TYPE_COUNT]);
        let links = particle_links(&sample(), &matrix, &config);

        let pairs: Vec<_> = links.iter().map(|l| (l.from.x, l.to.x)).collect();
        assert_eq!(pairs, vec![(100.0, 120.0), (100.0, 130.0), (120.0, 130.0)]);
        assert!(links.iter().all(|l| l.color == Rgb::WHITE));
    }

    #[test]
    fn links_match_sequential_scan() {
        let config = Config::default();
        let matrix = ForceMatrix::from_rows([[0.3, -0.2, 0.1, 0.9]; TYPE_COUNT]);
        let particles: Vec<_> = (0..120)
            .map(|i| Particle::new(ParticleType::ALL[i % TYPE_COUNT], (i * 13 % 200) as f32, (i * 29 % 150) as f32))
            .collect();

        let mut expected = Vec::new();
        for i in 0..particles.len() {
            for j in i + 1..particles.len() {
                let (a, b) = (&particles[i], &particles[j]);
                if (b.position - a.position).magnitude() < config.max_line_distance {
                    expected.push(Link {
                        from: a.position,
                        to: b.position,
                        color: link_color(scalar_force(a, b, &matrix, &config), &config),
                    });
                }
            }
        }

        assert_eq!(particle_links(&particles, &matrix, &config), expected);
    }

    #[test]
    fn no_pointer_no_pointer_links() {
        let config = Config::default();
        assert!(pointer_links(&sample(), None, &config).is_empty());
    }

    #[test]
    fn pointer_links_within_radius() {
        let config = Config::default();
        let pointer = Some(Vector2::new(100.0, 100.0));
        let links = pointer_links(&sample(), pointer, &config);

        // the coincident particle is skipped, the far one is out of range
        let targets: Vec<_> = links.iter().map(|l| l.to.x).collect();
        assert_eq!(targets, vec![120.0, 130.0]);
        assert!(links.iter().all(|l| l.from == Vector2::new(100.0, 100.0)));
    }

    #[test]
    fn glyphs_drawn_last() {
        let config = Config::default();
        let matrix = ForceMatrix::from_rows([[0.0; TYPE_COUNT]; TYPE_COUNT]);
        let mut surface = Recorder::default();

        let stats = draw_frame(&mut surface, &sample(), &matrix, Some(Vector2::new(0.0, 0.0)), &config);
        assert_eq!(stats, RenderStats { links: 3, pointer_links: 0 });

        let first_circle = surface.0.iter().position(|c| matches!(c, Command::Circle(..))).unwrap();
        assert_eq!(first_circle, 3);
        assert!(surface.0[first_circle..].iter().all(|c| matches!(c, Command::Circle(..))));
        assert_eq!(surface.0.len(), 3 + 4);
        assert_eq!(
            surface.0[3],
            Command::Circle(Vector2::new(100.0, 100.0), type_color(ParticleType::Red))
        );
    }
}
