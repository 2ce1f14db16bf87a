// src/catalog/seed.rs - Built-in product table

use super::{Catalog, CategoryInfo, NutritionFact, Product, ProductDetails};
use crate::types::Money;

const TOMATOES_IMAGE: &str = "https://images.unsplash.com/photo-1643926544872-dbcd8805e870?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxvcmdhbmljJTIwdG9tYXRvZXMlMjBmcmVzaHxlbnwxfHx8fDE3NTY3NTQ2MDl8MA&ixlib=rb-4.1.0&q=80&w=1080";
const ROOTS_IMAGE: &str = "https://images.unsplash.com/photo-1741515044901-58696421d24a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxmcmVzaCUyMGNhcnJvdHMlMjBvcmdhbmljfGVufDF8fHx8MTc1NjcyNjc0NXww&ixlib=rb-4.1.0&q=80&w=1080";
const PEPPERS_IMAGE: &str = "https://images.unsplash.com/photo-1509377244-b9820f59c12f?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxiZWxsJTIwcGVwcGVycyUyMGNvbG9yZnVsfGVufDF8fHx8MTc1NjczMzE4NHww&ixlib=rb-4.1.0&q=80&w=1080";
const LEAFY_IMAGE: &str = "https://images.unsplash.com/photo-1717240740629-6b784929f768?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxncmVlbiUyMGxlYWZ5JTIwdmVnZXRhYmxlc3xlbnwxfHx8fDE3NTY4MTk1MDN8MA&ixlib=rb-4.1.0&q=80&w=1080";
const MARKET_IMAGE: &str = "https://images.unsplash.com/photo-1690934164598-99267828e900?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxmYXJtZXJzJTIwbWFya2V0JTIwdmVnZXRhYmxlc3xlbnwxfHx8fDE3NTY3NDUyMzV8MA&ixlib=rb-4.1.0&q=80&w=1080";

pub(super) fn catalog() -> Catalog {
    Catalog::new(
        products(),
        categories(),
        vec!["1".into(), "2".into(), "3".into(), "4".into()],
    )
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    price: u64,
    image: &str,
    category: &str,
    rating: f32,
    weight: &str,
    description: &str,
    season: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: Money(price),
        image: image.to_string(),
        category: category.to_string(),
        rating,
        weight: weight.to_string(),
        description: description.to_string(),
        badge: None,
        original_price: None,
        season: Some(season.to_string()),
        details: None,
    }
}

fn products() -> Vec<Product> {
    let mut cherry_tomatoes = product(
        "1",
        "Tomates Cerises Bio",
        2250,
        TOMATOES_IMAGE,
        "tomatoes",
        4.8,
        "500g",
        "Tomates cerises biologiques, sucrées et croquantes",
        "été",
    );
    cherry_tomatoes.badge = Some("Promo".into());
    cherry_tomatoes.original_price = Some(Money(2600));
    cherry_tomatoes.details = Some(cherry_tomato_details());

    let mut carrots = product(
        "2",
        "Carottes Bio du Potager",
        1400,
        ROOTS_IMAGE,
        "roots",
        4.9,
        "1kg",
        "Carottes biologiques fraîchement récoltées",
        "automne",
    );
    carrots.badge = Some("Nouveau".into());

    vec![
        cherry_tomatoes,
        carrots,
        product(
            "3",
            "Poivrons Colorés",
            3450,
            PEPPERS_IMAGE,
            "peppers",
            4.7,
            "750g",
            "Mélange de poivrons rouges, jaunes et verts",
            "été",
        ),
        product(
            "4",
            "Salade Verte Fraîche",
            975,
            LEAFY_IMAGE,
            "leafy",
            4.6,
            "200g",
            "Salade verte croquante et tendre",
            "printemps",
        ),
        product(
            "5",
            "Tomates Anciennes",
            2950,
            TOMATOES_IMAGE,
            "tomatoes",
            4.9,
            "500g",
            "Variétés anciennes aux saveurs authentiques",
            "été",
        ),
        product(
            "6",
            "Épinards Frais",
            1600,
            LEAFY_IMAGE,
            "leafy",
            4.5,
            "300g",
            "Épinards tendres et riches en fer",
            "hiver",
        ),
        product(
            "7",
            "Radis Roses",
            750,
            ROOTS_IMAGE,
            "roots",
            4.4,
            "250g",
            "Radis croquants et légèrement piquants",
            "printemps",
        ),
        product(
            "8",
            "Courgettes Bio",
            1900,
            PEPPERS_IMAGE,
            "peppers",
            4.6,
            "1kg",
            "Courgettes tendres et savoureuses",
            "été",
        ),
    ]
}

fn cherry_tomato_details() -> ProductDetails {
    let nutrition = [
        ("Calories", "18 kcal/100g"),
        ("Vitamine C", "23mg/100g"),
        ("Potassium", "237mg/100g"),
        ("Fibres", "1.2g/100g"),
    ];

    ProductDetails {
        long_description: "Nos tomates cerises biologiques sont cultivées avec soin par nos producteurs \
            partenaires dans la région des Niayes. Elles offrent une explosion de saveurs sucrées et \
            acidulées, parfaites pour vos salades, apéritifs ou à déguster nature. Récoltées à maturité, \
            elles conservent toute leur fraîcheur et leurs qualités nutritionnelles."
            .to_string(),
        features: [
            "Certification biologique",
            "Cultivées au Sénégal",
            "Récoltées à maturité",
            "Riches en antioxydants",
            "Sans pesticides",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        nutrition: nutrition
            .into_iter()
            .map(|(label, value)| NutritionFact {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect(),
        storage: "À conserver au réfrigérateur entre 8 et 12°C. Consommer dans les 5 jours suivant la réception."
            .to_string(),
        origin: "Région des Niayes, Sénégal".to_string(),
        producer: "Coopérative Bio Niayes".to_string(),
        harvest_season: "Octobre à Mai".to_string(),
        review_count: 127,
        gallery: vec![TOMATOES_IMAGE.to_string(), MARKET_IMAGE.to_string()],
    }
}

fn categories() -> Vec<CategoryInfo> {
    let category = |id: &str, label: &str, description: &str, image: &str, note: &str| CategoryInfo {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        variety_note: note.to_string(),
    };

    vec![
        category("tomatoes", "Tomates", "Variétés goûteuses et colorées", TOMATOES_IMAGE, "12 variétés"),
        category("leafy", "Légumes-feuilles", "Salades, épinards, choux", LEAFY_IMAGE, "8 variétés"),
        category("roots", "Légumes-racines", "Carottes, radis, betteraves", ROOTS_IMAGE, "15 variétés"),
        category("peppers", "Poivrons & Courgettes", "Couleurs et saveurs variées", PEPPERS_IMAGE, "10 variétés"),
        category("seasonal", "Légumes de saison", "Sélection du moment", MARKET_IMAGE, "20+ produits"),
        category("herbs", "Herbes aromatiques", "Basilic, thym, persil", LEAFY_IMAGE, "12 variétés"),
    ]
}
