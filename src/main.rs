mod menu;
mod receipt;

use crate::menu::{FryOrderSize, InvalidQuantity, MenuItem};

fn main() -> Result<(), InvalidQuantity> {
    // burger specials run #1 through #6
    let last_burger_special = 6;
    let special_number = 7;

    let meal = vec![
        MenuItem::hamburger(3)?,
        MenuItem::fries(FryOrderSize::Large),
        MenuItem::drink("Coke", 16)?,
    ];

    print!(
        "{}",
        receipt::meal_summary(&meal, special_number, last_burger_special)
    );
    Ok(())
}
