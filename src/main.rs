use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rust_decimal_macros::dec;
use std::io;
use tiffin::application::engine::OrderEngine;
use tiffin::domain::menu::{Category, MenuItem, Rateable};
use tiffin::domain::money::Price;
use tiffin::domain::partner::DeliveryPartner;
use tiffin::domain::ports::RegistryBox;
use tiffin::domain::restaurant::Restaurant;
use tiffin::error::{ErrorKind, PlatformError};
use tiffin::infrastructure::in_memory::InMemoryRegistry;
use tiffin::interfaces::console::summary_writer::SummaryWriter;
use tiffin::social::{Comment, PhotoPost, Post, SocialPlatform, TextPost};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    demo: Option<Demo>,
}

#[derive(Subcommand)]
enum Demo {
    /// Scripted food-delivery order workflow
    Food {
        /// Also dump the final order state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Scripted social posting session
    Social,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    match Cli::parse().demo.unwrap_or(Demo::Food { json: false }) {
        Demo::Food { json } => run_food_demo(json),
        Demo::Social => run_social_demo(),
    }
}

/// Domain errors are reported and the demo continues; anything tagged as a
/// programmer error is surfaced loudly instead.
fn report(error: &PlatformError) {
    match error.kind() {
        ErrorKind::Recoverable => println!("Error: {error}"),
        ErrorKind::ProgrammerError => eprintln!("Bug: {error}"),
    }
}

fn run_food_demo(json: bool) -> Result<()> {
    let registry: RegistryBox = Box::new(InMemoryRegistry::new());
    let engine = OrderEngine::new(registry);

    let mut paneer = MenuItem::new(
        "V1",
        "Paneer Butter Masala",
        Price::new(dec!(299)).into_diagnostic()?,
        Category::Veg,
    );
    let biryani = MenuItem::new(
        "V2",
        "Veg Biryani",
        Price::new(dec!(199)).into_diagnostic()?,
        Category::Veg,
    );
    let chicken = MenuItem::new(
        "NV1",
        "Butter Chicken",
        Price::new(dec!(399)).into_diagnostic()?,
        Category::NonVeg,
    );

    let mut spice_villa = Restaurant::new("Spice Villa", "Andheri");
    spice_villa.add_menu_item(paneer.clone());
    spice_villa.add_menu_item(biryani.clone());
    spice_villa.add_menu_item(chicken.clone());
    let spice_villa = engine.registry().register_restaurant(spice_villa);
    engine
        .registry()
        .register_partner(DeliveryPartner::new("John"));

    // Happy path: two items, priority placement, covering payment
    let order = engine.create_order("Rahul", spice_villa).into_diagnostic()?;
    engine.add_item(order, paneer.clone()).into_diagnostic()?;
    engine.add_item(order, biryani.clone()).into_diagnostic()?;

    match engine.place_order(order, true) {
        Ok(receipt) => {
            println!("Order {} placed! Total: ₹{}", receipt.order, receipt.total);
            if receipt.priority {
                println!("Priority delivery assigned!");
            }
            match &receipt.partner {
                Some(name) => println!("Delivery partner: {name}"),
                None => println!("No delivery partner available!"),
            }
        }
        Err(e) => report(&e),
    }

    match engine.process_payment(order, dec!(500)) {
        Ok(receipt) => println!("Payment of ₹{} successful!", receipt.amount),
        Err(e) => report(&e),
    }

    for item in engine.order(order).into_diagnostic()?.items() {
        println!("{} | Category: {}", item.details(), item.category());
    }

    paneer.add_rating(5, "Delicious!").into_diagnostic()?;
    println!(
        "{} rated {:.1} on average",
        paneer.name(),
        paneer.average_rating()
    );

    // A fresh order with the same total; underpayment is rejected
    let order2 = engine.create_order("Rahul", spice_villa).into_diagnostic()?;
    engine.add_item(order2, paneer.clone()).into_diagnostic()?;
    engine.add_item(order2, biryani.clone()).into_diagnostic()?;
    match engine.process_payment(order2, dec!(100)) {
        Ok(receipt) => println!("Payment of ₹{} successful!", receipt.amount),
        Err(e) => report(&e),
    }

    // Ordering from a closed restaurant fails at placement
    if let Some(mut restaurant) = engine.registry().restaurant(spice_villa) {
        restaurant.close();
        engine.registry().store_restaurant(spice_villa, restaurant);
    }
    let order3 = engine.create_order("Rahul", spice_villa).into_diagnostic()?;
    engine.add_item(order3, chicken).into_diagnostic()?;
    match engine.place_order(order3, false) {
        Ok(_) => println!("Order {order3} placed!"),
        Err(e) => println!("Caught: {e}"),
    }

    println!("Order processing finished.");

    let orders = engine.into_orders();
    let stdout = io::stdout();
    let mut writer = SummaryWriter::new(stdout.lock());
    if json {
        writer.write_json(&orders).into_diagnostic()?;
    } else {
        writer.write_text(&orders).into_diagnostic()?;
    }

    Ok(())
}

fn run_social_demo() -> Result<()> {
    let mut platform = SocialPlatform::new();
    platform.register_user("Alice", "alice@social.com");
    platform.register_user("Bob", "bob@social.com");
    platform.follow("Alice", "Bob");
    println!("Alice now follows Bob");

    platform
        .publish(Post::Text(TextPost::new("Alice", "My first post!")))
        .into_diagnostic()?;
    platform
        .publish(Post::Photo(PhotoPost::new("Alice", "vacation.jpg")))
        .into_diagnostic()?;

    for post in platform.posts_mut() {
        println!("{}", post.render());
        post.as_likeable_mut().add_like("Bob");
        if let Some(commentable) = post.as_commentable_mut() {
            commentable.add_comment(Comment::new("Bob", "Nice one!"));
        }
        println!("Likes: {}", post.like_count());
    }

    println!("Alice's feed:");
    for line in platform.feed("Alice", None) {
        println!("  {line}");
    }
    println!("Alice's feed (last 1 post):");
    for line in platform.feed("Alice", Some(1)) {
        println!("  {line}");
    }

    println!("Session ended.");
    Ok(())
}
