use pendulum_sim::*;

fn main() {
    let sim = Simulator::default();
    let params: Vec<_> = Planet::ALL
        .iter()
        .map(|&planet| SimulationParameters::default().with_planet(planet))
        .collect();

    for (planet, result) in Planet::ALL.iter().zip(sim.simulate_batch(&params)) {
        match result {
            Ok(result) => println!(
                "{planet:>8}: {} samples, at rest after {:.2} s",
                result.len(),
                result.duration()
            ),
            Err(err) => println!("{planet:>8}: {err}"),
        }
    }
}
