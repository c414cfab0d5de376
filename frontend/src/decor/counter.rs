use gloo_timers::callback::Interval;
use yew::prelude::*;

const FRAME_MS: u32 = 16;
const DURATION_MS: f64 = 1200.0;

/// A statistic like "10,000+" split into the number to count up to and the
/// text that follows it.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterTarget {
    pub value: f64,
    pub decimals: usize,
    pub suffix: String,
}

pub fn parse_stat(display: &str) -> Option<CounterTarget> {
    let start = display.find(|c: char| c.is_ascii_digit())?;
    let numeric_len = display[start..]
        .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '.'))
        .unwrap_or(display.len() - start);
    let numeric: String = display[start..start + numeric_len].chars().filter(|c| *c != ',').collect();
    let numeric = numeric.trim_end_matches('.');
    let value = numeric.parse::<f64>().ok()?;
    let decimals = numeric.split('.').nth(1).map(str::len).unwrap_or(0);
    Some(CounterTarget {
        value,
        decimals,
        suffix: display[start + numeric_len..].to_string(),
    })
}

/// Ease-out cubic progress of the count-up at `elapsed_ms`.
pub fn counter_frame(target: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    let t = (elapsed_ms / duration_ms).max(0.0);
    target * (1.0 - (1.0 - t).powi(3))
}

/// Groups thousands for whole numbers, keeps the decimals the source had.
pub fn format_count(value: f64, decimals: usize) -> String {
    if decimals > 0 {
        return format!("{:.*}", decimals, value);
    }
    let digits = format!("{:.0}", value.max(0.0));
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub value: AttrValue,
    #[prop_or(true)]
    pub animated: bool,
}

/// Advances the count-up by one frame. Returns the value to show and whether
/// the animation has landed on `goal`.
pub fn tick(goal: f64, elapsed_ms: &mut f64) -> (f64, bool) {
    *elapsed_ms += FRAME_MS as f64;
    (counter_frame(goal, *elapsed_ms, DURATION_MS), *elapsed_ms >= DURATION_MS)
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let target = parse_stat(&props.value);
    let shown = use_state(|| 0.0_f64);
    // Flipping this re-runs the effect, whose cleanup drops the ticker.
    let finished = use_state_eq(|| false);

    {
        let shown = shown.clone();
        let finished = finished.clone();
        let goal = target.as_ref().map(|t| t.value);
        let animated = props.animated;
        let is_done = *finished;
        use_effect_with_deps(
            move |(goal, done)| {
                let mut ticker = None;
                if let Some(goal) = *goal {
                    if animated && !*done {
                        let mut elapsed = 0.0;
                        let interval = Interval::new(FRAME_MS, move || {
                            let (value, landed) = tick(goal, &mut elapsed);
                            shown.set(value);
                            if landed {
                                finished.set(true);
                            }
                        });
                        ticker = Some(interval);
                    } else {
                        shown.set(goal);
                    }
                }
                move || drop(ticker)
            },
            (goal, is_done),
        );
    }

    match target {
        Some(target) => html! {
            <div class="counter">
                <span class="counter-value">{ format_count(*shown, target.decimals) }</span>
                if !target.suffix.is_empty() {
                    <span class="counter-suffix">{ target.suffix.clone() }</span>
                }
            </div>
        },
        None => html! { <div class="counter">{ props.value.clone() }</div> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_landing_page_stats() {
        let stat = parse_stat("10,000+").unwrap();
        assert_eq!(stat.value, 10000.0);
        assert_eq!(stat.suffix, "+");

        let stat = parse_stat("98%").unwrap();
        assert_eq!(stat.value, 98.0);
        assert_eq!(stat.suffix, "%");

        let stat = parse_stat("2 Days").unwrap();
        assert_eq!(stat.value, 2.0);
        assert_eq!(stat.suffix, " Days");

        let stat = parse_stat("1.5M+").unwrap();
        assert_eq!(stat.value, 1.5);
        assert_eq!(stat.decimals, 1);
        assert_eq!(stat.suffix, "M+");
    }

    #[test]
    fn text_without_numbers_is_not_counted() {
        assert_eq!(parse_stat("Always"), None);
    }

    #[test]
    fn count_up_eases_out_and_lands_on_target() {
        assert_eq!(counter_frame(100.0, 0.0, 1000.0), 0.0);
        let early = counter_frame(100.0, 250.0, 1000.0);
        let late = counter_frame(100.0, 750.0, 1000.0);
        assert!(early > 25.0, "ease-out should be ahead of linear");
        assert!(late > early && late < 100.0);
        assert_eq!(counter_frame(100.0, 1000.0, 1000.0), 100.0);
        assert_eq!(counter_frame(100.0, 5000.0, 1000.0), 100.0);
    }

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(10000.0, 0), "10,000");
        assert_eq!(format_count(999.4, 0), "999");
        assert_eq!(format_count(1234567.0, 0), "1,234,567");
        assert_eq!(format_count(1.46, 1), "1.5");
    }

    #[test]
    fn ticking_stops_once_the_target_is_reached() {
        let mut elapsed = 0.0;
        let mut frames = 0;
        let last = loop {
            frames += 1;
            let (value, landed) = tick(250.0, &mut elapsed);
            if landed {
                break value;
            }
            assert!(value < 250.0);
        };
        assert_eq!(frames, (DURATION_MS / FRAME_MS as f64).ceil() as u32);
        assert_eq!(last, 250.0);
    }
}
