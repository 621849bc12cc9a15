use crate::client::Client;
use anyhow::{Context, Result};

struct SeedRecipe {
    name: &'static str,
    ingredients: &'static [&'static str],
}

const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        name: "Classic Spaghetti Carbonara",
        ingredients: &[
            "400 g spaghetti",
            "200 g pancetta or guanciale",
            "4 large eggs",
            "100 g Pecorino Romano, freshly grated",
            "2 tsp black pepper, freshly ground",
        ],
    },
    SeedRecipe {
        name: "Chicken Tikka Masala",
        ingredients: &[
            "700 g boneless chicken thighs",
            "1 cup plain yogurt",
            "2 tbsp garam masala",
            "1 can tomato puree",
            "1 cup heavy cream",
        ],
    },
    SeedRecipe {
        name: "Overnight Oats",
        ingredients: &[
            "1/2 cup rolled oats",
            "1/2 cup milk",
            "1/4 cup Greek yogurt",
            "1 tbsp chia seeds",
            "1 tbsp maple syrup",
        ],
    },
    SeedRecipe {
        name: "strawberry milkshake",
        ingredients: &["strawberry puree", "vanilla ice cream", "sugar"],
    },
];

pub async fn seed(server: &str) -> Result<()> {
    let client = Client::new(server);

    println!("Seeding {} recipes into {}", SAMPLE_RECIPES.len(), server);

    for sample in SAMPLE_RECIPES {
        let ingredients: Vec<String> = sample.ingredients.iter().map(|i| i.to_string()).collect();
        let recipe = client
            .create(sample.name, &ingredients)
            .await
            .with_context(|| format!("Failed to create recipe {:?}", sample.name))?;
        println!("  {}  {}", recipe.id, recipe.name);
    }

    Ok(())
}
