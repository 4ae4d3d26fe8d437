use huemix::color::Rgb;
use huemix::error::ColorFormatError;
use huemix::feedback::mixing_tips;
use huemix::mix::Slot;
use huemix::palette::generate_random_color;
use huemix::session::Session;

fn main() -> Result<(), ColorFormatError> {
    // 1. Pick a target, either from the command line or at random
    let mut rng = rand::rng();
    let target = std::env::args()
        .nth(1)
        .map(|hex| hex.parse::<Rgb>())
        .transpose()?
        .unwrap_or_else(|| generate_random_color(&mut rng));
    let mut session = Session::with_target(target, &mut rng);

    let palette = *session.palette();
    println!("\n    Challenge #{}: match {}\n", session.challenge(), session.target());
    for (slot, pigment) in palette.displayed() {
        let role = if slot == Slot::Distractor { "?" } else { " " };
        println!("    {} {:<8}{}", role, pigment.label(), pigment.rgb());
    }

    // 2. Take a naive first guess
    session.set_percentage(Slot::Primary1, 50);
    session.set_percentage(Slot::Primary2, 50);
    let attempt = session.submit().clone();
    println!(
        "\n    50/50 mixes to {} with {}% match: {}",
        attempt.mixed,
        attempt.match_percentage,
        attempt.feedback()
    );
    for hint in session.hints() {
        println!("      - {}", hint);
    }

    // 3. Let the solver have a go
    let optimal = session.optimal_mix();
    session.reset();
    session.set_percentage(Slot::Primary1, optimal.primary1.percentage());
    session.set_percentage(Slot::Primary2, optimal.primary2.percentage());
    session.set_white(optimal.white());
    session.set_black(optimal.black());
    let attempt = session.submit().clone();
    println!(
        "\n    {}% {} + {}% {} + {}% white + {}% black mixes to {}",
        optimal.primary1.percentage(),
        optimal.primary1.label(),
        optimal.primary2.percentage(),
        optimal.primary2.label(),
        optimal.white(),
        optimal.black(),
        attempt.mixed
    );
    println!(
        "    with {}% match (ΔE {:.2}): {}\n",
        attempt.match_percentage,
        attempt.delta_e,
        attempt.feedback()
    );

    // 4. Share some wisdom
    for tip in mixing_tips(palette.primary1(), palette.primary2()) {
        println!("    💡 {}", tip);
    }
    println!();

    Ok(())
}
