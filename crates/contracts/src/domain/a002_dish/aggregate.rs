use serde::{Deserialize, Serialize};

use crate::domain::common::{Activatable, Entity, EntityId, HasStatus};
use crate::shared::validation::{require, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DishType {
    #[default]
    Common,
    Special,
    Vegetarian,
    Vegan,
    Popular,
    #[serde(other)]
    Other,
}

impl DishType {
    /// Types selectable in the dish form
    pub const ALL: [DishType; 5] = [
        DishType::Common,
        DishType::Special,
        DishType::Vegetarian,
        DishType::Vegan,
        DishType::Popular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DishType::Common => "COMMON",
            DishType::Special => "SPECIAL",
            DishType::Vegetarian => "VEGETARIAN",
            DishType::Vegan => "VEGAN",
            DishType::Popular => "POPULAR",
            DishType::Other => "OTHER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DishType::Common => "Common",
            DishType::Special => "Special",
            DishType::Vegetarian => "Vegetarian",
            DishType::Vegan => "Vegan",
            DishType::Popular => "Popular",
            DishType::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<DishType> {
        DishType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: EntityId,
    pub name: String,
    /// Price in cents
    pub price: i64,
    #[serde(rename = "type", default)]
    pub dish_type: DishType,
    /// Not every API payload carries it
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Dish {
    pub fn to_dto(&self) -> DishDto {
        DishDto {
            name: self.name.clone(),
            price: self.price,
            dish_type: self.dish_type,
        }
    }
}

impl Entity for Dish {
    const RESOURCE: &'static str = "dish";
    const LABEL: &'static str = "dish";

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl HasStatus for Dish {
    type Status = bool;
    const STATUS_PARAM: &'static str = "active";

    fn status(&self) -> bool {
        self.active
    }

    fn set_status(&mut self, status: bool) {
        self.active = status;
    }

    fn status_value(status: &bool) -> String {
        status.to_string()
    }
}

impl Activatable for Dish {
    fn is_active(&self) -> bool {
        self.active
    }
}

/// Create/update payload, price in cents
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DishDto {
    pub name: String,
    pub price: i64,
    #[serde(rename = "type")]
    pub dish_type: DishType,
}

/// Raw dish form input, price typed in currency units
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DishForm {
    pub name: String,
    pub price: String,
    pub dish_type: String,
}

impl DishForm {
    pub fn from_dish(dish: &Dish) -> Self {
        Self {
            name: dish.name.clone(),
            price: format!("{:.2}", dish.price as f64 / 100.0),
            dish_type: dish.dish_type.as_str().to_string(),
        }
    }

    /// Validate and convert to the API payload
    pub fn to_dto(&self) -> Result<DishDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name");

        let price = if require(&mut errors, "price", &self.price, "Price") {
            match parse_price_input(&self.price) {
                Ok(cents) => Some(cents),
                Err(e) => {
                    errors.add("price", e);
                    None
                }
            }
        } else {
            None
        };

        let dish_type = if require(&mut errors, "type", &self.dish_type, "Dish type") {
            match DishType::parse(&self.dish_type) {
                Some(t) => Some(t),
                None => {
                    errors.add("type", "Unknown dish type");
                    None
                }
            }
        } else {
            None
        };

        match (price, dish_type) {
            (Some(price), Some(dish_type)) if errors.is_empty() => Ok(DishDto {
                name: self.name.trim().to_string(),
                price,
                dish_type,
            }),
            _ => Err(errors),
        }
    }
}

/// Parse a price typed in currency units ("18.50" or "18,50") into cents
pub fn parse_price_input(input: &str) -> Result<i64, String> {
    let normalized = input.trim().replace(',', ".");
    let value: f64 = normalized
        .parse()
        .map_err(|_| "Price must be a positive number".to_string())?;
    if !value.is_finite() || value < 0.0 {
        return Err("Price must be a positive number".to_string());
    }
    Ok((value * 100.0).round() as i64)
}

/// Aggregate counters shown above the dish table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DishStats {
    pub total: usize,
    pub common: usize,
    pub popular: usize,
    pub most_expensive: Option<Dish>,
}

impl DishStats {
    pub fn from_dishes(dishes: &[Dish]) -> Self {
        // First maximum wins on ties
        let most_expensive = dishes
            .iter()
            .fold(None::<&Dish>, |max, dish| match max {
                Some(m) if m.price >= dish.price => Some(m),
                _ => Some(dish),
            })
            .cloned();
        Self {
            total: dishes.len(),
            common: dishes.iter().filter(|d| d.dish_type == DishType::Common).count(),
            popular: dishes.iter().filter(|d| d.dish_type == DishType::Popular).count(),
            most_expensive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: EntityId, price: i64, dish_type: DishType) -> Dish {
        Dish {
            id,
            name: format!("Dish {}", id),
            price,
            dish_type,
            active: true,
        }
    }

    #[test]
    fn test_missing_active_defaults_to_true() {
        let d: Dish = serde_json::from_str(r#"{"id":1,"name":"Risotto","price":2160,"type":"COMMON"}"#).unwrap();
        assert!(d.active);
        assert_eq!(d.dish_type, DishType::Common);
    }

    #[test]
    fn test_parse_price_input() {
        assert_eq!(parse_price_input("18.50"), Ok(1850));
        assert_eq!(parse_price_input("18,5"), Ok(1850));
        assert_eq!(parse_price_input(" 0 "), Ok(0));
        assert_eq!(parse_price_input("14.73"), Ok(1473));
        assert!(parse_price_input("-1").is_err());
        assert!(parse_price_input("abc").is_err());
    }

    #[test]
    fn test_form_validation() {
        let form = DishForm {
            name: "Pasta al Pesto".into(),
            price: "24".into(),
            dish_type: "VEGETARIAN".into(),
        };
        assert_eq!(
            form.to_dto(),
            Ok(DishDto {
                name: "Pasta al Pesto".into(),
                price: 2400,
                dish_type: DishType::Vegetarian,
            })
        );

        let errors = DishForm::default().to_dto().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("price"), Some("Price is required"));
        assert_eq!(errors.get("type"), Some("Dish type is required"));

        let negative = DishForm {
            name: "X".into(),
            price: "-3".into(),
            dish_type: "COMMON".into(),
        };
        assert_eq!(
            negative.to_dto().unwrap_err().get("price"),
            Some("Price must be a positive number")
        );
    }

    #[test]
    fn test_form_round_trips_existing_dish() {
        let d = dish(3, 4431, DishType::Special);
        assert_eq!(DishForm::from_dish(&d).to_dto(), Ok(d.to_dto()));
    }

    #[test]
    fn test_stats() {
        let dishes = vec![
            dish(1, 1473, DishType::Common),
            dish(2, 4431, DishType::Popular),
            dish(3, 4431, DishType::Common),
        ];
        let stats = DishStats::from_dishes(&dishes);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.common, 2);
        assert_eq!(stats.popular, 1);
        assert_eq!(stats.most_expensive.map(|d| d.id), Some(2));
        assert_eq!(DishStats::from_dishes(&[]).most_expensive, None);
    }
}
