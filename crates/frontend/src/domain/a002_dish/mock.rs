use contracts::domain::a002_dish::aggregate::{Dish, DishType};
use contracts::domain::common::EntityId;

use crate::shared::api::FallbackProvider;

/// Sample dishes shown when the API is down; prices in cents
pub struct DishMocks;

fn dish(id: EntityId, name: &str, price: i64, dish_type: DishType, active: bool) -> Dish {
    Dish {
        id,
        name: name.to_string(),
        price,
        dish_type,
        active,
    }
}

impl FallbackProvider<Dish> for DishMocks {
    fn items(&self) -> Vec<Dish> {
        vec![
            dish(1, "Tiramisú a la Criolla", 1473, DishType::Common, true),
            dish(2, "Risotto Especial", 2160, DishType::Common, true),
            dish(3, "Risotto Tradicional", 4431, DishType::Common, false),
            dish(4, "Ensalada Mediterránea", 1850, DishType::Vegetarian, true),
            dish(5, "Pasta al Pesto", 2400, DishType::Vegetarian, false),
        ]
    }

    /// Status changes on sample dishes are kept locally
    fn accepts_offline_status(&self, id: EntityId) -> bool {
        self.find(id).is_some()
    }
}
