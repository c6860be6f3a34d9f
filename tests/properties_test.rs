//! Property tests for the cost engine:
//! 1. Aggregation is pure
//! 2. An identity scenario reproduces the base figures
//! 3. Pricing a free ingredient never lowers cost or completeness
//! 4. Margins are None or finite
//! 5. Scaling one component is linear and local

use menu_cost_engine::engine::{
    NaiveConverter, ScenarioState, aggregate, apply_scenario, margin, normalize, reset_scenario,
};
use menu_cost_engine::models::{
    BucketKey, RawComponent, RawComponentIngredient, RawIngredient, RawMenuItem, RawRecipeLine,
    Recipe,
};
use proptest::prelude::*;

/// (quantity, ingredient price)
type LineSpec = (f64, Option<f64>);

#[derive(Debug, Clone)]
struct RecipeSpec {
    flat: bool,
    buckets: Vec<Vec<LineSpec>>,
    menu_price: Option<f64>,
}

impl RecipeSpec {
    fn line_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Replace the price of the `index`-th line across all buckets.
    fn with_price_at(&self, index: usize, price: Option<f64>) -> Self {
        let mut next = self.clone();
        let mut seen = 0;
        for bucket in &mut next.buckets {
            for line in bucket.iter_mut() {
                if seen == index {
                    line.1 = price;
                }
                seen += 1;
            }
        }
        next
    }

    fn build(&self) -> Recipe {
        let mut counter = 0;
        let mut ingredient = |price: Option<f64>| {
            counter += 1;
            RawIngredient {
                id: Some(format!("i{}", counter)),
                name: Some(format!("Ingredient {}", counter)),
                unit: Some("each".to_string()),
                last_price: price,
                last_ordered_at: None,
            }
        };

        let item = RawMenuItem {
            id: Some("m1".to_string()),
            name: Some("Dish".to_string()),
            price: self.menu_price,
        };

        if self.flat {
            let lines: Vec<RawRecipeLine> = self
                .buckets
                .iter()
                .flatten()
                .map(|&(quantity, price)| RawRecipeLine {
                    quantity: Some(quantity),
                    unit: None,
                    ingredient: Some(ingredient(price)),
                })
                .collect();
            normalize(&item, &[], &lines, &NaiveConverter).unwrap()
        } else {
            let components: Vec<RawComponent> = self
                .buckets
                .iter()
                .enumerate()
                .map(|(i, lines)| RawComponent {
                    id: Some(format!("c{}", i)),
                    name: Some(format!("Component {}", i)),
                    cost: None,
                    ingredients: lines
                        .iter()
                        .map(|&(quantity, price)| RawComponentIngredient {
                            id: None,
                            quantity: Some(quantity),
                            unit: None,
                            ingredient: Some(ingredient(price)),
                        })
                        .collect(),
                })
                .collect();
            normalize(&item, &components, &[], &NaiveConverter).unwrap()
        }
    }
}

// ============================================================================
// Strategies
// ============================================================================

fn price_strategy() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(0.0)),
        (0.01f64..50.0).prop_map(Some),
    ]
}

fn line_strategy() -> impl Strategy<Value = LineSpec> {
    (0.0f64..10.0, price_strategy())
}

fn menu_price_strategy() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), (-5.0f64..80.0).prop_map(Some)]
}

fn flat_strategy() -> impl Strategy<Value = RecipeSpec> {
    (prop::collection::vec(line_strategy(), 0..6), menu_price_strategy()).prop_map(
        |(lines, menu_price)| RecipeSpec {
            flat: true,
            buckets: vec![lines],
            menu_price,
        },
    )
}

fn structured_strategy() -> impl Strategy<Value = RecipeSpec> {
    (
        prop::collection::vec(prop::collection::vec(line_strategy(), 0..5), 1..4),
        menu_price_strategy(),
    )
        .prop_map(|(buckets, menu_price)| RecipeSpec {
            flat: false,
            buckets,
            menu_price,
        })
}

fn recipe_strategy() -> impl Strategy<Value = RecipeSpec> {
    prop_oneof![flat_strategy(), structured_strategy()]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn aggregate_is_pure(spec in recipe_strategy()) {
        let recipe = spec.build();
        let first = aggregate(&recipe);
        let second = aggregate(&recipe);

        prop_assert_eq!(first.total_cost.to_bits(), second.total_cost.to_bits());
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn identity_scenario_matches_base(spec in recipe_strategy()) {
        let recipe = spec.build();
        let breakdown = aggregate(&recipe);
        let scenario = apply_scenario(&recipe, &breakdown, &reset_scenario());

        prop_assert_eq!(scenario.total_cost, breakdown.total_cost);
        prop_assert_eq!(
            scenario.margin.margin,
            margin(recipe.price_or_zero(), breakdown.total_cost)
        );
        prop_assert_eq!(scenario.cost_delta, 0.0);
    }

    #[test]
    fn reset_after_edits_matches_base(
        spec in recipe_strategy(),
        m in 0.0f64..2.0,
        price in 0.0f64..40.0,
    ) {
        let recipe = spec.build();
        let breakdown = aggregate(&recipe);
        let edited = recipe
            .bucket_keys()
            .into_iter()
            .fold(ScenarioState::new(), |state, key| state.apply_multiplier(key, m))
            .set_price_override(Some(price));

        let scenario = apply_scenario(&recipe, &breakdown, &edited.reset());
        prop_assert_eq!(scenario.total_cost, breakdown.total_cost);
        prop_assert_eq!(scenario.price, recipe.menu_price);
    }

    #[test]
    fn pricing_an_ingredient_is_monotone(
        spec in recipe_strategy(),
        index in any::<prop::sample::Index>(),
        new_price in 0.01f64..50.0,
    ) {
        prop_assume!(spec.line_count() > 0);
        let k = index.index(spec.line_count());

        let before = aggregate(&spec.with_price_at(k, Some(0.0)).build());
        let after = aggregate(&spec.with_price_at(k, Some(new_price)).build());

        prop_assert!(after.total_cost >= before.total_cost);
        prop_assert!(!(before.has_complete_data && !after.has_complete_data));
    }

    #[test]
    fn margin_is_none_without_data(price in -100.0f64..=0.0, cost in -100.0f64..100.0) {
        prop_assert_eq!(margin(price, cost), None);
        prop_assert_eq!(margin(cost.abs() + 1.0, -cost.abs()), None);
    }

    #[test]
    fn margin_is_finite_with_data(price in 0.01f64..1.0e300, cost in 0.01f64..1.0e300) {
        let m = margin(price, cost);
        prop_assert!(m.is_some());
        prop_assert!(m.unwrap().is_finite());
    }

    #[test]
    fn scaling_one_component_is_linear(
        spec in structured_strategy(),
        index in any::<prop::sample::Index>(),
        m in 0.0f64..3.0,
    ) {
        let recipe = spec.build();
        let breakdown = aggregate(&recipe);
        let keys = recipe.bucket_keys();
        let target = keys[index.index(keys.len())].clone();

        let state = ScenarioState::new().apply_multiplier(target.clone(), m);
        let scenario = apply_scenario(&recipe, &breakdown, &state);

        for bucket in &scenario.buckets {
            let base = breakdown.bucket_cost(&bucket.key).unwrap();
            if bucket.key == target {
                let tolerance = 1e-9 * base.max(1.0);
                prop_assert!((bucket.cost - m * base).abs() <= tolerance);
            } else {
                prop_assert_eq!(bucket.cost, base);
            }
        }
        prop_assert!(!matches!(target, BucketKey::Lines));
    }
}
