//! Static site content: store products, game modes and the smaller lists
//! shown on the home and servers pages. Nothing here is mutated at runtime.

use strum_macros::{EnumIter, IntoStaticStr};

use crate::price::Price;

/// Store categories, in sidebar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Category {
    Ranks,
    Kits,
    Cosmetics,
    Boosters,
}

impl Category {
    /// The stable key used by the category selector.
    pub const fn key(self) -> &'static str {
        match self {
            Category::Ranks => "ranks",
            Category::Kits => "kits",
            Category::Cosmetics => "cosmetics",
            Category::Boosters => "boosters",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Ranks => "Rütbeler",
            Category::Kits => "PvP Kitleri",
            Category::Cosmetics => "Kostümler",
            Category::Boosters => "Güçlendiriciler",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Category::Ranks => "👑",
            Category::Kits => "⚔",
            Category::Cosmetics => "💎",
            Category::Boosters => "⚡",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        use strum::IntoEnumIterator;
        Category::iter().find(|category| category.key() == key)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub category: Category,
    pub name: &'static str,
    pub price: Price,
    /// Shown struck through next to `price` when present.
    pub original_price: Option<Price>,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub icon: &'static str,
}

pub static PRODUCTS: [Product; 12] = [
    Product {
        id: 1,
        category: Category::Ranks,
        name: "VIP Rütbesi",
        price: Price::from_dollars(25),
        original_price: Some(Price::from_dollars(35)),
        description: "Özel komutlar, renkli isim, özel spawn alanı ve günlük bonuslar",
        features: &["Renkli chat", "Özel prefix", "Günlük 100 coin", "VIP spawn"],
        popular: false,
        icon: "👑",
    },
    Product {
        id: 2,
        category: Category::Ranks,
        name: "Premium Rütbesi",
        price: Price::from_dollars(45),
        original_price: Some(Price::from_dollars(60)),
        description: "VIP'nin tüm özelliklerini plus ekstra kitler ve cosmetic'ler",
        features: &[
            "Tüm VIP özellikler",
            "3 özel kit",
            "Kozmetik erişimi",
            "Günlük 200 coin",
        ],
        popular: true,
        icon: "💎",
    },
    Product {
        id: 3,
        category: Category::Ranks,
        name: "Elite Rütbesi",
        price: Price::from_dollars(75),
        original_price: Some(Price::from_dollars(100)),
        description: "En üst seviye rütbe, özel arenalar ve sınırsız özellikler",
        features: &[
            "Tüm Premium özellikler",
            "Özel arenalar",
            "Sınırsız kitler",
            "Günlük 500 coin",
        ],
        popular: false,
        icon: "🔱",
    },
    Product {
        id: 4,
        category: Category::Kits,
        name: "Ninja Kiti",
        price: Price::from_dollars(15),
        original_price: None,
        description: "Hızlı saldırılar için tasarlanmış özel ninja ekipmanları",
        features: &["Hız II etkisi", "Görünmezlik potasyonu", "Özel ninja kılıcı"],
        popular: false,
        icon: "🥷",
    },
    Product {
        id: 5,
        category: Category::Kits,
        name: "Gladyatör Kiti",
        price: Price::from_dollars(20),
        original_price: None,
        description: "Ağır zırh ve güçlü silahlarla düşmanlarını ez",
        features: &["Netherite zırh", "Güç III kılıç", "Sağlık artırıcı"],
        popular: false,
        icon: "⚔",
    },
    Product {
        id: 6,
        category: Category::Kits,
        name: "Büyücü Kiti",
        price: Price::from_dollars(18),
        original_price: None,
        description: "Büyülü silahlar ve potasyonlarla sihirli savaş",
        features: &["Büyülü ok", "Mana potasyonları", "Sihirli değnek"],
        popular: false,
        icon: "🔮",
    },
    Product {
        id: 7,
        category: Category::Cosmetics,
        name: "Ejder Kanadları",
        price: Price::from_dollars(12),
        original_price: None,
        description: "Sırtında görsel olarak ejder kanadları taşı",
        features: &["Animasyonlu kanatlar", "Özel partiküller", "Uçma efekti"],
        popular: false,
        icon: "🐉",
    },
    Product {
        id: 8,
        category: Category::Cosmetics,
        name: "Alevli Kask",
        price: Price::from_dollars(8),
        original_price: None,
        description: "Kafanda sürekli yanan ateş efekti",
        features: &["Ateş animasyonu", "Özel ses efektleri"],
        popular: false,
        icon: "🔥",
    },
    Product {
        id: 9,
        category: Category::Cosmetics,
        name: "Gölge Pelerini",
        price: Price::from_dollars(15),
        original_price: None,
        description: "Gizemli görünüm için karanlık pelerin",
        features: &["Karanlık partiküller", "Gölge efekti", "Özel animasyon"],
        popular: false,
        icon: "🌙",
    },
    Product {
        id: 10,
        category: Category::Boosters,
        name: "XP Booster %50",
        price: Price::from_dollars(5),
        original_price: None,
        description: "1 hafta boyunca %50 fazla deneyim puanı",
        features: &["7 gün süre", "%50 XP artışı", "Tüm aktiviteler"],
        popular: false,
        icon: "⚡",
    },
    Product {
        id: 11,
        category: Category::Boosters,
        name: "Coin Booster %100",
        price: Price::from_dollars(8),
        original_price: None,
        description: "3 gün boyunca ikiye katlanmış coin kazancı",
        features: &["3 gün süre", "%100 coin artışı", "Anında aktif"],
        popular: false,
        icon: "💰",
    },
    Product {
        id: 12,
        category: Category::Boosters,
        name: "Mega Booster Paketi",
        price: Price::from_dollars(20),
        original_price: None,
        description: "Tüm boosterları içeren süper paket",
        features: &["%100 XP", "%100 Coin", "1 ay süre", "Bonus hediyeler"],
        popular: true,
        icon: "🚀",
    },
];

pub fn product(id: u32) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.id == id)
}

/// Products whose category key equals `key`, in catalog order.
pub fn products_in(key: &str) -> impl Iterator<Item = &'static Product> + '_ {
    PRODUCTS
        .iter()
        .filter(move |product| product.category.key() == key)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeStatus {
    Online,
    Offline,
}

impl ModeStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ModeStatus::Online => "Çevrimiçi",
            ModeStatus::Offline => "Kapalı",
        }
    }

    pub const fn is_online(self) -> bool {
        matches!(self, ModeStatus::Online)
    }
}

/// A game mode listed on the home and servers pages.
#[derive(Debug)]
pub struct GameMode {
    pub name: &'static str,
    /// One-line description used on the home page.
    pub summary: &'static str,
    pub description: &'static str,
    pub status: ModeStatus,
    pub players: &'static str,
    pub features: &'static [&'static str],
    pub announcement: Option<&'static str>,
    pub version: Option<&'static str>,
}

pub static GAME_MODES: [GameMode; 2] = [
    GameMode {
        name: "TrapPvP",
        summary: "Tuzaklar ve stratejiler ile mücadele eden klasik PvP modu",
        description: "Tuzaklar ve stratejiler ile mücadele eden klasik PvP modu. \
                      Rakiplerinizi tuzaklara düşürün ve galip gelin!",
        status: ModeStatus::Offline,
        players: "Kapalı",
        features: &[
            "Tuzak sistemleri",
            "Stratejik PvP",
            "Özel haritalar",
            "Takım savaşları",
        ],
        announcement: Some("Oyun modu bakımda! Yakında daha iyi deneyimle geri dönüyoruz."),
        version: None,
    },
    GameMode {
        name: "BoxPvP",
        summary: "Kutular içinde hızlı ve yoğun 1v1 savaşları",
        description: "Kutular içinde hızlı ve yoğun 1v1 savaşları. \
                      Her kutu farklı bir meydan okuma!",
        status: ModeStatus::Online,
        players: "28/40",
        features: &["1v1 kutular", "Hızlı maçlar", "Sıralama sistemi", "Özel kitler"],
        announcement: None,
        version: Some("1.20.4"),
    },
];

/// `(title, description, icon)` cards on the home page.
pub static PVP_FEATURES: [(&str, &str, &str); 4] = [
    (
        "Özel PvP Kitleri",
        "Dengeli savaş sistemi ile benzersiz silah kitleri ve özel yetenekler",
        "⚔",
    ),
    (
        "Sıralama Sistemi",
        "Rekabetçi ELO sıralaması ile liderlik tablosunda yüksel",
        "🏆",
    ),
    (
        "Haftalık Turnuvalar",
        "Özel ödüller ve unvanlar için haftalık epic turnuvalar",
        "👑",
    ),
    (
        "Anti-Cheat Pro",
        "Gelişmiş koruma sistemi ile her zaman adil savaş garantisi",
        "🛡",
    ),
];

/// A number that counts up on the home page.
#[derive(Clone, Copy, Debug)]
pub struct GameStat {
    pub target: u32,
    pub label: &'static str,
    pub suffix: &'static str,
}

pub static GAME_STATS: [GameStat; 4] = [
    GameStat {
        target: 200,
        label: "Maksimum Oyuncu",
        suffix: "",
    },
    GameStat {
        target: 24,
        label: "Saat PvP",
        suffix: "/7",
    },
    GameStat {
        target: 12,
        label: "Savaş Arenası",
        suffix: "+",
    },
    GameStat {
        target: 100,
        label: "Günlük Savaş",
        suffix: "+",
    },
];

/// `(title, value, icon)` tiles on the servers page.
pub static SERVER_STATS: [(&str, &str, &str); 4] = [
    ("Toplam Mod", "2", "🖥"),
    ("Aktif Oyuncu", "171", "👥"),
    ("Günlük Rekor", "287", "🏆"),
    ("Uptime", "99.8%", "🛡"),
];

pub static CONNECTION_STEPS: [&str; 5] = [
    "Minecraft Java Edition'ı başlatın",
    "Ana menüden 'Çok Oyunculu' seçin",
    "Yukarıdaki sunucu IP'sini kopyalayın",
    "'Sunucu Ekle' butonuna tıklayın",
    "IP'yi yapıştırın ve bağlanın!",
];

/// `(label, value)` rows; the version row is filled from configuration.
pub static REQUIREMENTS: [(&str, &str); 3] = [
    ("Gerekli RAM:", "2GB+"),
    ("İnternet:", "Kararlı bağlantı"),
    ("Platform:", "Java Edition"),
];

pub static PAYMENT_METHODS: [(&str, &str); 4] = [
    ("PayPal", "💳"),
    ("Kredi Kartı", "💳"),
    ("Papara", "📱"),
    ("İninal", "🎯"),
];

/// Footer links. Some point at paths the router does not know, which land on
/// the not-found page.
pub static FOOTER_MODE_LINKS: [(&str, &str); 4] = [
    ("TrapPvP", "/sunucular"),
    ("BoxPvP", "/sunucular"),
    ("Turnuvalar", "/sunucular"),
    ("Etkinlikler", "/sunucular"),
];

pub static FOOTER_COMMUNITY_LINKS: [(&str, &str); 4] = [
    ("Discord Sunucusu", "/discord"),
    ("Sıralama Tablosu", "/siralama"),
    ("Savaş Kuralları", "/kurallar"),
    ("Destek", "/destek"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn product_ids_are_unique() {
        let ids: HashSet<u32> = PRODUCTS.iter().map(|product| product.id).collect();
        assert_eq!(ids.len(), PRODUCTS.len());
    }

    #[test]
    fn every_category_has_products() {
        for category in Category::iter() {
            assert!(
                products_in(category.key()).count() > 0,
                "{category:?} is empty"
            );
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
    }

    #[test]
    fn discounts_are_below_original_price() {
        for product in &PRODUCTS {
            if let Some(original) = product.original_price {
                assert!(product.price < original, "{}", product.name);
            }
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(product(12).map(|p| p.name), Some("Mega Booster Paketi"));
        assert!(product(99).is_none());
    }

    #[test]
    fn only_online_modes_have_a_version() {
        for mode in &GAME_MODES {
            assert_eq!(mode.version.is_some(), mode.status.is_online());
            assert_eq!(mode.announcement.is_some(), !mode.status.is_online());
        }
    }
}
