use thiserror::Error;


// Fry portion sizes, a plain discriminator: the calorie mapping for each
// size lives on MenuItem, not here
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FryOrderSize {
    Small,
    Large,
}

// One item on the fast-food menu, each kind carrying its own payload.
// A drink's brand has no canonical field name, callers bind it whenever
// they match on the variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Hamburger { patties: i32 },
    Fries { size: FryOrderSize },
    Drink(String, i32),
    Cookie,
}

// Quantity rejected by a checked constructor
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field} must be positive, got {value}")]
pub struct InvalidQuantity {
    pub field: &'static str,
    pub value: i32,
}


impl MenuItem {
    // Checked constructors. Building a variant directly accepts any
    // integer; these reject non-positive quantities up front, an
    // extension over the plain variant forms.

    pub fn hamburger(patties: i32) -> Result<Self, InvalidQuantity> {
        if patties <= 0 {
            return Err(InvalidQuantity {
                field: "patties",
                value: patties,
            });
        }
        Ok(MenuItem::Hamburger { patties })
    }

    pub fn fries(size: FryOrderSize) -> Self {
        MenuItem::Fries { size }
    }

    pub fn drink(brand: &str, ounces: i32) -> Result<Self, InvalidQuantity> {
        if ounces <= 0 {
            return Err(InvalidQuantity {
                field: "ounces",
                value: ounces,
            });
        }
        Ok(MenuItem::Drink(brand.to_string(), ounces))
    }

    pub fn cookie() -> Self {
        MenuItem::Cookie
    }

    // Whether this item counts toward the numbered burger special
    pub fn is_included_in_special_order(&self, number: i32, last_burger_special: i32) -> bool {
        match self {
            MenuItem::Hamburger { patties } => *patties <= 3 && number <= last_burger_special,
            // fries and cookies ride along with every special
            MenuItem::Fries { .. } | MenuItem::Cookie => true,
            // brand does not matter, the special only covers a 16oz cup
            MenuItem::Drink(_, ounces) => *ounces == 16,
        }
    }

    // Calorie count for this item
    pub fn calories(&self) -> i32 {
        match self {
            MenuItem::Hamburger { patties } => patties * 1000,
            MenuItem::Fries { size } => match size {
                FryOrderSize::Small => 300,
                FryOrderSize::Large => 700,
            },
            MenuItem::Drink(brand, ounces) => {
                let calories_per_ounce = if brand.to_lowercase().contains("diet") {
                    0
                } else {
                    14
                };
                ounces * calories_per_ounce
            }
            MenuItem::Cookie => 500,
        }
    }
}
