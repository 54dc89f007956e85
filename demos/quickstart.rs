use almanac::{CalendarDate, DayCount, Gregorian, Hebrew, Islamic, Julian, Persian};
use tracing_subscriber::EnvFilter;

fn main() {
    // `RUST_LOG` overrides the default filter, e.g. `RUST_LOG=almanac=trace`.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("almanac=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let now = DayCount::now();
    let gregorian = Gregorian::from_day_count(now);

    println!("{now}");
    println!("{}: {gregorian} ({})", Gregorian::NAME, gregorian.weekday_name());
    print_date(gregorian.to::<Julian>());
    print_date(gregorian.to::<Islamic>());
    print_date(gregorian.to::<Persian>());
    print_date(gregorian.to::<Hebrew>());
}

fn print_date<C: CalendarDate + std::fmt::Display>(date: C) {
    println!(
        "{}: {date} ({}, {} days in month)",
        C::NAME,
        date.weekday_name(),
        date.days_in_month()
    );
}
