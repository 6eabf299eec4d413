use std::fmt::Write;

use crate::menu::{FryOrderSize, MenuItem};


// Receipt line for a single menu item
pub fn item_line(item: &MenuItem) -> String {
    match item {
        MenuItem::Hamburger { patties } => format!("burger w/ {} patties!", patties),
        MenuItem::Fries { size } => {
            let label = match size {
                FryOrderSize::Small => "small",
                FryOrderSize::Large => "large",
            };
            format!("a {} order of fries!", label)
        }
        MenuItem::Drink(brand, ounces) => format!("a {}oz {}", ounces, brand),
        MenuItem::Cookie => "a cookie".to_string(),
    }
}

// Console summary for a whole meal: one block per item, then the
// calorie total, flagged with "!!!" past 2000
pub fn meal_summary(items: &[MenuItem], number: i32, last_burger_special: i32) -> String {
    let mut out = String::new();
    let mut total_calories = 0;

    for item in items {
        let added_cost = if item.is_included_in_special_order(number, last_burger_special) {
            "included in special"
        } else {
            "extra cost"
        };
        let calories = item.calories();
        total_calories += calories;

        let _ = writeln!(out, "{}", item_line(item));
        let _ = writeln!(out, "{}", added_cost);
        let _ = writeln!(out, "{} Calories", calories);
        let _ = writeln!(out);
    }

    let prompt = if total_calories > 2000 { "!!!" } else { "" };
    let _ = writeln!(out, "Total meal calories = {}{}", total_calories, prompt);
    out
}
