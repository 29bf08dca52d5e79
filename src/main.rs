//! Futures calculator walkthrough.
//!
//! Runs a handful of positions through validation, the calculator and the
//! risk tiers, printing what a trader would see for each.

use futures_calc::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Futures Leverage Calculator");
    println!("Minimum balance to avoid liquidation\n");

    scenario_1_reference_long();
    scenario_2_conservative_short();
    scenario_3_thin_take_profit();
    scenario_4_invalid_form();
    scenario_5_leverage_sweep();

    info!("walkthrough finished");
}

/// The stock example: 10 lots of 0.001 BTC at 200x.
fn scenario_1_reference_long() {
    println!("Scenario 1: Reference Long at 200x\n");
    print_assessment(&PositionInput::default());
}

/// Same size, short side, 5x. Stop fills well before liquidation.
fn scenario_2_conservative_short() {
    println!("Scenario 2: Conservative Short at 5x\n");

    let input = PositionInput::default().with_side(Side::Short).with_leverage(5.0);
    print_assessment(&input);
}

/// A take-profit so small the fees eat it.
fn scenario_3_thin_take_profit() {
    println!("Scenario 3: Take Profit Smaller Than Fees\n");

    let input = PositionInput {
        take_profit_percent: 0.01,
        fees: 2.0,
        ..PositionInput::default().with_leverage(20.0)
    };
    print_assessment(&input);
}

/// Form text with several bad fields. Nothing is computed.
fn scenario_4_invalid_form() {
    println!("Scenario 4: Invalid Form Input\n");

    let mut raw = RawPositionInput::from(&PositionInput::default());
    raw.leverage = "500".to_string();
    raw.lots = "ten".to_string();
    raw.fees = "-1".to_string();
    println!("  leverage={:?} lots={:?} fees={:?}", raw.leverage, raw.lots, raw.fees);

    print_assessment(&raw.normalize());
}

/// Where each risk tier starts and how close liquidation gets.
fn scenario_5_leverage_sweep() {
    println!("Scenario 5: Leverage Sweep\n");

    for leverage in [1.0, 10.0, 11.0, 50.0, 51.0, 100.0, 101.0, 200.0] {
        let input = PositionInput::default().with_leverage(leverage);
        match try_compute(&input) {
            Ok(result) => println!(
                "  {:>5}x  {:<13} liq {} ({}), min balance {}",
                leverage,
                classify_risk(leverage).label(),
                format_currency(result.liquidation_price, 2),
                format_percent(result.liquidation_percent, 2),
                format_currency(result.min_balance, 2),
            ),
            Err(err) => println!("  {:>5}x  rejected: {}", leverage, err),
        }
    }
    println!();
}

fn print_assessment(input: &PositionInput) {
    let assessment = match assess(input) {
        Ok(assessment) => assessment,
        Err(err) => {
            match err.invalid_fields() {
                Some(fields) => {
                    for field in fields.iter() {
                        println!("  {} = {}: {}", field, input.value_of(field), field.message());
                    }
                }
                None => println!("  {}", err),
            }
            println!("  Enter valid parameters to see calculations\n");
            return;
        }
    };

    let r = &assessment.result;
    println!(
        "  {} {}x, risk level: {}",
        input.side,
        input.leverage,
        assessment.risk_level
    );
    println!("  Minimum balance: {}", format_currency(r.min_balance, 2));
    for notice in assessment.notices() {
        println!("  ! {}", notice);
    }

    println!(
        "  Position: {} units ({} lots), notional {}",
        format_number(r.position_units, 6),
        input.lots,
        format_currency(r.notional_value, 2)
    );
    println!(
        "  Initial margin {} + loss at SL {} + fees {}",
        format_currency(r.initial_margin, 2),
        format_currency(r.loss_at_stop_loss, 2),
        format_currency(input.fees, 2)
    );
    println!(
        "  Entry {}, TP {} (+{}), SL {} (-{}), liq {} (±{})",
        format_currency(input.entry_price, 2),
        format_currency(r.take_profit_price, 2),
        format_percent(input.take_profit_percent, 2),
        format_currency(r.stop_loss_price, 2),
        format_percent(input.stop_loss_percent, 2),
        format_currency(r.liquidation_price, 2),
        format_percent(r.liquidation_percent, 2)
    );
    println!(
        "  If TP hits: {}, if SL hits: -{}\n",
        format_currency(r.take_profit_profit, 2),
        format_currency(r.loss_at_stop_loss, 2)
    );
}
