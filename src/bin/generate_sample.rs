//! Generate a plausible Palmer-Penguins-style CSV for test fixtures:
//! `cargo run --bin generate_sample -- [output.csv]`

use anyhow::{Context, Result};

/// Per-species measurement distributions: (mean, sigma) pairs roughly
/// matching the published dataset summary statistics.
struct SpeciesProfile {
    name: &'static str,
    islands: &'static [&'static str],
    bill_length: (f64, f64),
    bill_depth: (f64, f64),
    flipper_length: (f64, f64),
    body_mass: (f64, f64),
    count: usize,
}

const PROFILES: [SpeciesProfile; 3] = [
    SpeciesProfile {
        name: "Adelie",
        islands: &["Torgersen", "Biscoe", "Dream"],
        bill_length: (38.8, 2.7),
        bill_depth: (18.3, 1.2),
        flipper_length: (190.0, 6.5),
        body_mass: (3701.0, 459.0),
        count: 152,
    },
    SpeciesProfile {
        name: "Gentoo",
        islands: &["Biscoe"],
        bill_length: (47.5, 3.1),
        bill_depth: (15.0, 1.0),
        flipper_length: (217.0, 6.5),
        body_mass: (5076.0, 504.0),
        count: 124,
    },
    SpeciesProfile {
        name: "Chinstrap",
        islands: &["Dream"],
        bill_length: (48.8, 3.3),
        bill_depth: (18.4, 1.1),
        flipper_length: (196.0, 7.1),
        body_mass: (3733.0, 384.0),
        count: 68,
    },
];

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/penguins.csv".to_string());

    let mut rng = SimpleRng::new(0x5eed_9e47);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {path}"))?;

    writer.write_record([
        "species",
        "island",
        "bill_length_mm",
        "bill_depth_mm",
        "flipper_length_mm",
        "body_mass_g",
        "sex",
        "year",
    ])?;

    for profile in &PROFILES {
        for i in 0..profile.count {
            let island = profile.islands[i % profile.islands.len()];

            // Roughly 2% of observations are missing all measurements,
            // like the real dataset's unmeasured specimens.
            let unmeasured = rng.next_u64() % 50 == 0;

            let (bill_length, bill_depth, flipper, mass, sex) = if unmeasured {
                let na = "NA".to_string();
                (na.clone(), na.clone(), na.clone(), na.clone(), na)
            } else {
                let (mu, sigma) = profile.bill_length;
                let bill_length = format!("{:.1}", rng.gauss(mu, sigma));
                let (mu, sigma) = profile.bill_depth;
                let bill_depth = format!("{:.1}", rng.gauss(mu, sigma));
                let (mu, sigma) = profile.flipper_length;
                let flipper = format!("{:.0}", rng.gauss(mu, sigma));
                let (mu, sigma) = profile.body_mass;
                let mass = format!("{:.0}", (rng.gauss(mu, sigma) / 25.0).round() * 25.0);
                let sex = if rng.next_u64() % 2 == 0 { "male" } else { "female" };
                (bill_length, bill_depth, flipper, mass, sex.to_string())
            };

            let year = (2007 + (rng.next_u64() % 3) as i32).to_string();

            writer.write_record([
                profile.name,
                island,
                &bill_length,
                &bill_depth,
                &flipper,
                &mass,
                &sex,
                &year,
            ])?;
        }
    }

    writer.flush()?;
    println!("Wrote {path}");
    Ok(())
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Gaussian sample via Box-Muller.
    fn gauss(&mut self, mu: f64, sigma: f64) -> f64 {
        let u1 = self.next_f64().max(f64::MIN_POSITIVE);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mu + sigma * z
    }
}
