//! The bundled Filipino-goods data set.

pub(crate) struct SeedCategory {
    pub slug: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub item_count: u32,
    pub description: &'static str,
}

pub(crate) struct SeedProduct {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: &'static str,
    pub badge: Option<&'static str>,
    pub rating: f32,
    pub category: &'static str,
    pub in_stock: bool,
    pub description: Option<&'static str>,
}

pub(crate) const CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        slug: "all-products",
        title: "All Products",
        icon: "\u{1f6d2}",
        item_count: 120,
        description: "Browse our complete collection of authentic Filipino foods",
    },
    SeedCategory {
        slug: "canned-goods",
        title: "Canned Goods",
        icon: "\u{1f96b}",
        item_count: 120,
        description: "Premium quality canned goods from the Philippines",
    },
    SeedCategory {
        slug: "snacks-chips",
        title: "Snacks & Chips",
        icon: "\u{1f35f}",
        item_count: 85,
        description: "Crispy and delicious Filipino snacks and chips",
    },
    SeedCategory {
        slug: "instant-noodles",
        title: "Instant Noodles",
        icon: "\u{1f35c}",
        item_count: 65,
        description: "Quick and tasty Filipino instant noodles",
    },
    SeedCategory {
        slug: "beverages",
        title: "Beverages",
        icon: "\u{1f964}",
        item_count: 45,
        description: "Refreshing Filipino drinks and beverages",
    },
    SeedCategory {
        slug: "condiments",
        title: "Condiments",
        icon: "\u{1f9c2}",
        item_count: 55,
        description: "Essential Filipino condiments and sauces",
    },
    SeedCategory {
        slug: "sweets",
        title: "Sweets",
        icon: "\u{1f36c}",
        item_count: 40,
        description: "Delicious Filipino candies and sweet treats",
    },
];

/// Products shown on the home page, in display order.
pub(crate) const FEATURED: [&str; 6] = [
    "premium-corned-beef",
    "chippy-chips-assorted",
    "canned-sardines-tomato",
    "pancit-canton-10pack",
    "coconut-milk-premium",
    "assorted-filipino-sweets",
];

pub(crate) const PRODUCTS: &[SeedProduct] = &[
    // Canned goods
    SeedProduct {
        id: "premium-corned-beef",
        name: "Premium Corned Beef",
        price: 89.99,
        original_price: Some(120.00),
        image: "https://images.unsplash.com/photo-1733700469173-15d46efc2c09?w=1080&q=80",
        badge: Some("BESTSELLER"),
        rating: 4.8,
        category: "canned-goods",
        in_stock: true,
        description: Some("Premium quality corned beef 150g"),
    },
    SeedProduct {
        id: "corned-beef-original-175g",
        name: "Corned Beef Original 175g",
        price: 95.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1733700469173-15d46efc2c09?w=1080&q=80",
        badge: None,
        rating: 4.7,
        category: "canned-goods",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "canned-sardines-tomato",
        name: "Canned Sardines in Tomato Sauce",
        price: 32.50,
        original_price: Some(40.00),
        image: "https://images.unsplash.com/photo-1612570964312-e0f339a84d6f?w=1080&q=80",
        badge: None,
        rating: 4.6,
        category: "canned-goods",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "sardines-green-chili",
        name: "Sardines Green Chili 155g",
        price: 35.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1612570964312-e0f339a84d6f?w=1080&q=80",
        badge: None,
        rating: 4.5,
        category: "canned-goods",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "coconut-milk-premium",
        name: "Coconut Milk Premium Quality",
        price: 55.00,
        original_price: Some(65.00),
        image: "https://images.unsplash.com/photo-1587890767851-e9bc526764b1?w=1080&q=80",
        badge: None,
        rating: 4.7,
        category: "canned-goods",
        in_stock: true,
        description: Some("Premium coconut milk 400ml"),
    },
    SeedProduct {
        id: "coconut-cream-165ml",
        name: "Coconut Cream 165ml",
        price: 45.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1587890767851-e9bc526764b1?w=1080&q=80",
        badge: Some("NEW"),
        rating: 4.6,
        category: "canned-goods",
        in_stock: true,
        description: None,
    },
    // Snacks & chips
    SeedProduct {
        id: "chippy-chips-assorted",
        name: "Chippy Chips Assorted Pack",
        price: 45.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1748765968997-ba9bae9cfd7b?w=1080&q=80",
        badge: Some("BESTSELLER"),
        rating: 4.5,
        category: "snacks-chips",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "banana-chips",
        name: "Crispy Banana Chips 100g",
        price: 35.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1748765968997-ba9bae9cfd7b?w=1080&q=80",
        badge: None,
        rating: 4.6,
        category: "snacks-chips",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "cheese-rings-party",
        name: "Cheese Rings Party Size",
        price: 55.00,
        original_price: Some(65.00),
        image: "https://images.unsplash.com/photo-1748765968997-ba9bae9cfd7b?w=1080&q=80",
        badge: None,
        rating: 4.7,
        category: "snacks-chips",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "shrimp-crackers",
        name: "Shrimp Crackers 200g",
        price: 60.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1748765968997-ba9bae9cfd7b?w=1080&q=80",
        badge: Some("NEW"),
        rating: 4.8,
        category: "snacks-chips",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "sweet-corn-snack",
        name: "Sweet Corn Snack Mix",
        price: 40.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1748765968997-ba9bae9cfd7b?w=1080&q=80",
        badge: None,
        rating: 4.4,
        category: "snacks-chips",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "garlic-peanuts",
        name: "Spicy Garlic Peanuts 150g",
        price: 38.00,
        original_price: Some(45.00),
        image: "https://images.unsplash.com/photo-1748765968997-ba9bae9cfd7b?w=1080&q=80",
        badge: None,
        rating: 4.5,
        category: "snacks-chips",
        in_stock: true,
        description: None,
    },
    // Instant noodles
    SeedProduct {
        id: "pancit-canton-10pack",
        name: "Instant Pancit Canton - 10 Pack",
        price: 99.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1684707878393-02606f779d7f?w=1080&q=80",
        badge: Some("NEW"),
        rating: 4.9,
        category: "instant-noodles",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "pancit-canton-chili-mansi",
        name: "Pancit Canton Chili-Mansi 60g",
        price: 12.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1684707878393-02606f779d7f?w=1080&q=80",
        badge: None,
        rating: 4.8,
        category: "instant-noodles",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "pancit-canton-original",
        name: "Pancit Canton Original Flavor",
        price: 12.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1684707878393-02606f779d7f?w=1080&q=80",
        badge: None,
        rating: 4.7,
        category: "instant-noodles",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "instant-mami-chicken",
        name: "Instant Mami Chicken 55g",
        price: 10.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1684707878393-02606f779d7f?w=1080&q=80",
        badge: None,
        rating: 4.6,
        category: "instant-noodles",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "instant-batchoy-bowl",
        name: "Instant Batchoy Bowl 60g",
        price: 15.00,
        original_price: Some(18.00),
        image: "https://images.unsplash.com/photo-1684707878393-02606f779d7f?w=1080&q=80",
        badge: Some("NEW"),
        rating: 4.8,
        category: "instant-noodles",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "spicy-beef-noodles",
        name: "Spicy Beef Noodles 65g",
        price: 13.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1684707878393-02606f779d7f?w=1080&q=80",
        badge: None,
        rating: 4.5,
        category: "instant-noodles",
        in_stock: true,
        description: None,
    },
    // Beverages
    SeedProduct {
        id: "calamansi-juice",
        name: "Calamansi Juice Concentrate 500ml",
        price: 75.00,
        original_price: Some(85.00),
        image: "https://images.unsplash.com/photo-1587890767851-e9bc526764b1?w=1080&q=80",
        badge: Some("BESTSELLER"),
        rating: 4.7,
        category: "beverages",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "coconut-water-6pack",
        name: "Coconut Water 330ml - 6 Pack",
        price: 180.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1587890767851-e9bc526764b1?w=1080&q=80",
        badge: None,
        rating: 4.6,
        category: "beverages",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "mango-juice-1l",
        name: "Mango Juice Drink 1L",
        price: 95.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1587890767851-e9bc526764b1?w=1080&q=80",
        badge: None,
        rating: 4.5,
        category: "beverages",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "instant-coffee-3in1",
        name: "Instant Coffee 3-in-1 Box",
        price: 120.00,
        original_price: Some(140.00),
        image: "https://images.unsplash.com/photo-1587890767851-e9bc526764b1?w=1080&q=80",
        badge: None,
        rating: 4.8,
        category: "beverages",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "pineapple-juice",
        name: "Pineapple Juice 1L",
        price: 90.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1587890767851-e9bc526764b1?w=1080&q=80",
        badge: Some("NEW"),
        rating: 4.6,
        category: "beverages",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "sagot-gulaman-mix",
        name: "Sago't Gulaman Mix 500g",
        price: 85.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1587890767851-e9bc526764b1?w=1080&q=80",
        badge: None,
        rating: 4.7,
        category: "beverages",
        in_stock: true,
        description: None,
    },
    // Condiments
    SeedProduct {
        id: "banana-ketchup",
        name: "Banana Ketchup 320g",
        price: 45.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1612570964312-e0f339a84d6f?w=1080&q=80",
        badge: Some("BESTSELLER"),
        rating: 4.8,
        category: "condiments",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "soy-sauce-premium",
        name: "Soy Sauce Premium 500ml",
        price: 55.00,
        original_price: Some(65.00),
        image: "https://images.unsplash.com/photo-1612570964312-e0f339a84d6f?w=1080&q=80",
        badge: None,
        rating: 4.7,
        category: "condiments",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "vinegar-spiced",
        name: "Vinegar Spiced 385ml",
        price: 35.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1612570964312-e0f339a84d6f?w=1080&q=80",
        badge: None,
        rating: 4.6,
        category: "condiments",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "fish-sauce",
        name: "Fish Sauce 750ml",
        price: 60.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1612570964312-e0f339a84d6f?w=1080&q=80",
        badge: None,
        rating: 4.5,
        category: "condiments",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "shrimp-paste-bagoong",
        name: "Shrimp Paste (Bagoong) 250g",
        price: 50.00,
        original_price: Some(60.00),
        image: "https://images.unsplash.com/photo-1612570964312-e0f339a84d6f?w=1080&q=80",
        badge: Some("NEW"),
        rating: 4.7,
        category: "condiments",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "lechon-sauce",
        name: "Lechon Sauce 330g",
        price: 48.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1612570964312-e0f339a84d6f?w=1080&q=80",
        badge: None,
        rating: 4.8,
        category: "condiments",
        in_stock: true,
        description: None,
    },
    // Sweets
    SeedProduct {
        id: "assorted-filipino-sweets",
        name: "Assorted Filipino Sweets Mix",
        price: 120.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1763697039063-f68a90a95909?w=1080&q=80",
        badge: Some("BESTSELLER"),
        rating: 4.4,
        category: "sweets",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "white-rabbit-candy",
        name: "White Rabbit Candy 180g",
        price: 95.00,
        original_price: Some(110.00),
        image: "https://images.unsplash.com/photo-1763697039063-f68a90a95909?w=1080&q=80",
        badge: None,
        rating: 4.6,
        category: "sweets",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "polvoron-assorted",
        name: "Polvoron Assorted Pack 250g",
        price: 85.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1763697039063-f68a90a95909?w=1080&q=80",
        badge: None,
        rating: 4.7,
        category: "sweets",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "yema-candy",
        name: "Yema Candy Box 200g",
        price: 75.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1763697039063-f68a90a95909?w=1080&q=80",
        badge: Some("NEW"),
        rating: 4.5,
        category: "sweets",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "pastillas-de-leche",
        name: "Pastillas de Leche 150g",
        price: 65.00,
        original_price: Some(75.00),
        image: "https://images.unsplash.com/photo-1763697039063-f68a90a95909?w=1080&q=80",
        badge: None,
        rating: 4.8,
        category: "sweets",
        in_stock: true,
        description: None,
    },
    SeedProduct {
        id: "barquillos-wafer-rolls",
        name: "Barquillos (Wafer Rolls) 200g",
        price: 70.00,
        original_price: None,
        image: "https://images.unsplash.com/photo-1763697039063-f68a90a95909?w=1080&q=80",
        badge: None,
        rating: 4.6,
        category: "sweets",
        in_stock: true,
        description: None,
    },
];
