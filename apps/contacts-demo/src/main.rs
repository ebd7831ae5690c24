use anyhow::Context as _;
use contacts_demo::script::{demo_script, perform};
use contacts_demo::{load_contacts, ContactList};
use swiperow_core::{Clock, Looper, SystemClock};
use swiperow_ui::SwipeContext;
use web_time::Duration;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== swiperow contacts demo ===");
    println!("Rows swipe left to pull out a Delete action.");
    println!("Opening a row closes any other open row.");
    println!();

    let clock = SystemClock::new();
    let origin = clock.now();
    let looper = Looper::new();
    let context = SwipeContext::new(looper.handle());
    let mut list =
        ContactList::bind(&context, load_contacts()).context("binding contact rows")?;

    print!("{}", list.render());
    for step in demo_script() {
        println!();
        println!("> {step:?}");
        perform(&list, &step, clock.elapsed_millis(origin));
        while looper.has_pending_tasks() {
            looper.pump(&clock, origin);
            std::thread::sleep(Duration::from_millis(1));
        }
        print!("{}", list.render());
    }

    println!();
    println!("open rows: {:?}", list.open_rows());
    println!("clicked:   {:?}", list.clicked());
    list.unbind();
    Ok(())
}
