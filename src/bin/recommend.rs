//! Print Crop Recommendations
//!
//! Ranks catalog crops for one set of farmer answers and prints the
//! per-acre profit/loss for each.
//!
//! Run with: cargo run --bin recommend -- <district> <soil> <water> <season> [en|mr]
//! Example:  cargo run --bin recommend -- latur black rainfed kharif

use anyhow::{Context, Result};
use crop_advisor::{
    format_inr, format_inr_compact, recommend_with_profit, Catalog, FarmerInput, Language,
};

const USAGE: &str = "usage: recommend <district> <soil> <water> <season> [en|mr]\n\
    soil:   black | red | alluvial | laterite | sandy | clay\n\
    water:  rainfed | irrigation\n\
    season: kharif | rabi | zaid";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 4 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let lang: Language = match args.get(4) {
        Some(tag) => tag.parse().context("Invalid language")?,
        None => Language::default(),
    };
    let input = FarmerInput::new(&args[0], &args[1], &args[2], &args[3]);

    let catalog = Catalog::global();
    catalog.validate().context("Embedded catalog failed validation")?;

    println!(
        "District: {} | Soil: {} | Water: {} | Season: {}",
        catalog.district_name(&input.district, lang),
        input.soil_type,
        input.water_availability,
        input.season
    );
    println!();

    let ranked = recommend_with_profit(catalog, &input);
    if ranked.is_empty() {
        println!("No suitable crop found for these conditions.");
        return Ok(());
    }

    for (rank, rec) in ranked.iter().enumerate() {
        let crop = rec.crop;
        let profit = &rec.profit;
        let label = if profit.is_profit() { "Net profit" } else { "Net loss" };

        println!("{}. {} {}", rank + 1, crop.emoji, crop.name.get(lang));
        println!("   {}", crop.description.get(lang));
        println!(
            "   Yield: {}-{} q/acre | Price: {}/q ({}) at {}",
            crop.yield_per_acre.min,
            crop.yield_per_acre.max,
            format_inr(crop.market_price.current),
            crop.market_price.trend,
            crop.market_price.mandi.get(lang)
        );
        println!(
            "   Cost: {} | Income: {} | {}: {} | Cost ratio: {}%",
            format_inr(profit.total_cost),
            format_inr(profit.expected_income),
            label,
            format_inr(profit.net_profit.abs()),
            profit.cost_percentage
        );

        let lines: Vec<String> = crop
            .costs
            .items()
            .iter()
            .map(|(label, amount)| format!("{} {}", label, format_inr(f64::from(*amount))))
            .collect();
        println!("   Costs: {}", lines.join(" | "));
    }

    // Net profit comparison, one row per crop
    println!();
    println!("Net profit per acre:");
    let width = ranked
        .iter()
        .map(|rec| rec.crop.name.get(lang).chars().count())
        .max()
        .unwrap_or(0);
    for rec in &ranked {
        let name = rec.crop.name.get(lang);
        let pad = width - name.chars().count();
        println!(
            "  {}{} {:>6}",
            name,
            " ".repeat(pad),
            format_inr_compact(rec.profit.net_profit)
        );
    }

    Ok(())
}
