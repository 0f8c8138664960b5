//! Static landing-page content: brokers, their info cards, and packages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is compiled into the client so SSR and hydration render the
//! same markup without a data round-trip.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Product name used in titles and copy.
pub const PRODUCT_NAME: &str = "AUTO TRADE VIP";

/// A supported broker shown in the marquee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Broker {
    pub name: &'static str,
    pub logo: &'static str,
}

/// Copy shown in the broker info modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrokerInfo {
    pub description: &'static str,
    pub features: [&'static str; 4],
}

/// Letter badge drawn when a broker logo fails to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogoBadge {
    pub letter: &'static str,
    pub fill: &'static str,
    pub text_fill: &'static str,
}

/// A subscription package card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Package {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub brokers: &'static [&'static str],
    pub features: &'static [&'static str],
}

pub const BROKERS: &[Broker] = &[
    Broker {
        name: "Binomo",
        logo: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSK4zylqyfITSoEkIeL8KEz9E-WZmiK4rSy_pYQw6CZfoWvC85vcBXiXwkU&s=10",
    },
    Broker {
        name: "Olymptrade",
        logo: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRsUoKOR44xhomqsCSBhe-Vl8ouy_tPbQx21_ulOz5Hu8_H3pP9PcQCKk8&s=10",
    },
    Broker {
        name: "Stockity",
        logo: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSRMgQ9EISDJH3P7RTavxp-7dA3MPetjfWtFbZcQCno5cUmkdAK96_KrN0&s=10",
    },
    Broker {
        name: "IQ Option",
        logo: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQbXua0ti3GfHAsXE-cvuwOVzES7I1RLQ_2Yl07lffsfxaoYfaDyULClRA&s=10",
    },
    Broker {
        name: "Quotex",
        logo: "https://play-lh.googleusercontent.com/-ltphEmoRQ5Hf_XF9MWWQ6JHkUhtK1Idblgbe8zIEIcvlIkbUa1IAcNohSK4Bu7X9mGP=w240-h480-rw",
    },
    Broker {
        name: "Pocket Option",
        logo: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTMD00QA51sLIOjLHXYuHooNnoNbArzoaFu3Q&s",
    },
];

const SHARED_FEATURES_TAIL: [&str; 6] = [
    "MetaTrader 4 Platform",
    "3 indikator eksklusif: 'Binary Profit', 'Golden Moment', dan 'Price Action'",
    "Konektor indikator dan input sinyal",
    "Fitur lengkap (Full Features+)",
    "Tutorial pengguna lengkap",
    "Update gratis selamanya",
];

pub const PACKAGES: &[Package] = &[
    Package {
        id: "multi-platform",
        name: "TRADING ROBOT – MULTI PLATFORM",
        price: "$39.00",
        period: "bulan",
        brokers: &["IQ Option", "Olymptrade", "Quotex", "Pocket Option"],
        features: &[
            "Auto trade via MetaTrader 4 (MT4) ke IQ Option",
            "Manual trade via MT4 ke IQ Option",
            "Akses Grup VIP Telegram",
            "Back-tester untuk strategi",
            SHARED_FEATURES_TAIL[0],
            SHARED_FEATURES_TAIL[1],
            SHARED_FEATURES_TAIL[2],
            SHARED_FEATURES_TAIL[3],
            SHARED_FEATURES_TAIL[4],
            SHARED_FEATURES_TAIL[5],
        ],
    },
    Package {
        id: "binomo-stockity",
        name: "TRADING ROBOT – BINOMO & STOCKITY",
        price: "$46.00",
        period: "bulan",
        brokers: &["Binomo", "Stockity"],
        features: &[
            "Auto trade via MetaTrader 4 (MT4) ke Binomo & Stockity",
            "Manual trade via MT4 ke Binomo & Stockity",
            "Akses Grup VIP Telegram",
            "Back-tester untuk strategi",
            SHARED_FEATURES_TAIL[0],
            SHARED_FEATURES_TAIL[1],
            SHARED_FEATURES_TAIL[2],
            SHARED_FEATURES_TAIL[3],
            SHARED_FEATURES_TAIL[4],
            SHARED_FEATURES_TAIL[5],
        ],
    },
];

const FALLBACK_INFO: BrokerInfo = BrokerInfo {
    description: "Platform trading terpercaya dengan berbagai fitur unggulan.",
    features: ["Trading tools", "Customer support", "Secure platform", "Educational content"],
};

/// Look up a broker by display name.
#[must_use]
pub fn broker(name: &str) -> Option<&'static Broker> {
    BROKERS.iter().find(|b| b.name == name)
}

/// Look up a package by id.
#[must_use]
pub fn package(id: &str) -> Option<&'static Package> {
    PACKAGES.iter().find(|p| p.id == id)
}

/// Info card for `name`; unknown brokers get the generic card.
#[must_use]
pub fn broker_info(name: &str) -> BrokerInfo {
    match name {
        "Binomo" => BrokerInfo {
            description: "Platform trading binary options dengan interface yang user-friendly dan berbagai instrumen trading.",
            features: ["Minimal deposit rendah", "Trading turnamen", "Bonus deposit", "Mobile app"],
        },
        "Olymptrade" => BrokerInfo {
            description: "Broker internasional dengan lisensi resmi dan berbagai instrumen keuangan.",
            features: ["Regulasi international", "Fixed time trades", "Forex trading", "Crypto trading"],
        },
        "Stockity" => BrokerInfo {
            description: "Platform trading modern dengan fokus pada pengalaman user yang optimal.",
            features: ["Interface modern", "Fast execution", "Multiple assets", "Educational resources"],
        },
        "IQ Option" => BrokerInfo {
            description: "Salah satu broker terpopuler dengan jutaan trader di seluruh dunia.",
            features: ["Chart analysis tools", "Copy trading", "Tournaments", "Demo account"],
        },
        "Quotex" => BrokerInfo {
            description: "Platform trading inovatif dengan teknologi terdepan dan spread kompetitif.",
            features: ["Advanced charts", "Social trading", "Risk management", "Fast withdrawals"],
        },
        "Pocket Option" => BrokerInfo {
            description: "Broker yang menawarkan trading experience yang simpel namun powerful.",
            features: ["One-click trading", "Social features", "Achievement system", "Multiple languages"],
        },
        _ => FALLBACK_INFO,
    }
}

/// Badge drawn in place of a broken logo image.
#[must_use]
pub fn logo_badge(name: &str) -> LogoBadge {
    let (letter, fill) = match name {
        "Binomo" => ("B", "#00e676"),
        "Olymptrade" => ("OT", "#1a237e"),
        "Stockity" => ("S", "#ffd700"),
        "IQ Option" => ("IQ", "#00e676"),
        "Quotex" => ("Q", "#1a237e"),
        "Pocket Option" => ("PO", "#ffd700"),
        _ => ("X", "#00e676"),
    };
    // Gold badges need dark text to stay legible.
    let text_fill = if fill == "#ffd700" { "#1a237e" } else { "white" };
    LogoBadge { letter, fill, text_fill }
}

/// Support channels offered in the contact section and subscription modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactChannel {
    Telegram,
    WhatsApp,
}

impl ContactChannel {
    pub const ALL: [Self; 2] = [Self::Telegram, Self::WhatsApp];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Telegram => "Telegram",
            Self::WhatsApp => "WhatsApp",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Telegram => "fab fa-telegram",
            Self::WhatsApp => "fab fa-whatsapp",
        }
    }

    /// Toast shown when the channel is chosen.
    #[must_use]
    pub fn redirect_message(self) -> String {
        format!("Mengarahkan ke {} Support...", self.label())
    }
}
