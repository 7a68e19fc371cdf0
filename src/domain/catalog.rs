// src/domain/catalog.rs

/// A cleaning service offered on the site. Prices are per hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub base_price: f64,
    pub room_multiplier: f64,
    pub bathroom_multiplier: f64,
    /// Needs an on-site visit before the final quote.
    pub consultation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtraService {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    /// 1 to 5.
    pub rating: u8,
    pub text: &'static str,
    pub service: &'static str,
    pub avatar: &'static str,
}

impl Testimonial {
    pub fn stars(&self) -> u8 {
        self.rating.clamp(1, 5)
    }
}

pub const DEFAULT_SERVICE_ID: &str = "general";

pub static SERVICES: &[Service] = &[
    Service {
        id: "general",
        title: "Limpieza General",
        description: "Limpieza completa de tu hogar incluyendo pisos, baños, cocina y áreas comunes.",
        features: &[
            "Pisos y superficies",
            "Baños y cocinas",
            "Polvo y basura",
            "Cambio de sábanas",
        ],
        base_price: 25.0,
        room_multiplier: 1.0,
        bathroom_multiplier: 0.8,
        consultation: false,
    },
    Service {
        id: "deep",
        title: "Limpieza Profunda",
        description: "Limpieza intensiva para eliminar suciedad acumulada en áreas difíciles de alcanzar.",
        features: &[
            "Detalles y rincones",
            "Electrodomésticos",
            "Ventanas interiores",
            "Armarios y cajones",
        ],
        base_price: 35.0,
        room_multiplier: 1.2,
        bathroom_multiplier: 1.0,
        consultation: false,
    },
    Service {
        id: "post-construction",
        title: "Limpieza Post-Obra",
        description: "Eliminación de residuos de construcción y limpieza profesional post-renovación.",
        features: &[
            "Residuos de obra",
            "Polvo de construcción",
            "Superficies delicadas",
            "Limpieza final",
        ],
        base_price: 45.0,
        room_multiplier: 1.5,
        bathroom_multiplier: 1.2,
        consultation: true,
    },
    Service {
        id: "windows",
        title: "Limpieza de Ventanas",
        description: "Ventanas impecables tanto interiores como exteriores con productos especializados.",
        features: &[
            "Cristales sin marcas",
            "Marcos y persianas",
            "Altura segura",
            "Productos ecológicos",
        ],
        base_price: 15.0,
        room_multiplier: 0.6,
        bathroom_multiplier: 0.3,
        consultation: false,
    },
    Service {
        id: "upholstery",
        title: "Tapicería y Alfombras",
        description: "Limpieza profunda de muebles tapizados y alfombras con equipos profesionales.",
        features: &[
            "Eliminación de manchas",
            "Desinfección",
            "Secado rápido",
            "Sin químicos agresivos",
        ],
        base_price: 40.0,
        room_multiplier: 0.8,
        bathroom_multiplier: 0.2,
        consultation: false,
    },
    Service {
        id: "express",
        title: "Servicio Express",
        description: "Limpieza rápida y eficiente para emergencias o visitas inesperadas.",
        features: &[
            "30-60 minutos",
            "Áreas prioritarias",
            "Personal experto",
            "Disponible 24/7",
        ],
        base_price: 30.0,
        room_multiplier: 0.5,
        bathroom_multiplier: 0.4,
        consultation: false,
    },
];

pub static EXTRA_SERVICES: &[ExtraService] = &[
    ExtraService { id: "oven", name: "Limpieza de horno", price: 15.0 },
    ExtraService { id: "fridge", name: "Limpieza de refrigerador", price: 12.0 },
    ExtraService { id: "windows-inside", name: "Ventanas interiores", price: 20.0 },
    ExtraService { id: "laundry", name: "Lavado de ropa", price: 18.0 },
    ExtraService { id: "ironing", name: "Planchado", price: 20.0 },
    ExtraService { id: "balcony", name: "Terraza o balcón", price: 15.0 },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "María Rodríguez",
        rating: 5,
        text: "Excelente servicio! Mi casa quedó impecable y el personal fue muy profesional.",
        service: "Limpieza General",
        avatar: "MR",
    },
    Testimonial {
        name: "Carlos Méndez",
        rating: 5,
        text: "Contraté la limpieza post-obra y quedé impresionado con los resultados. Totalmente recomendado.",
        service: "Limpieza Post-Obra",
        avatar: "CM",
    },
    Testimonial {
        name: "Ana López",
        rating: 4,
        text: "Muy buenos precios y calidad. El servicio express me salvó cuando tuve visitas sorpresa.",
        service: "Servicio Express",
        avatar: "AL",
    },
    Testimonial {
        name: "Jorge Castillo",
        rating: 5,
        text: "Usé la calculadora, agendé en dos minutos y llegaron puntuales. Así da gusto.",
        service: "Limpieza Profunda",
        avatar: "JC",
    },
    Testimonial {
        name: "Valentina Rojas",
        rating: 5,
        text: "Mi sillón parecía nuevo después de la limpieza de tapicería. Volveré a contratarlos.",
        service: "Tapicería y Alfombras",
        avatar: "VR",
    },
];

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

pub fn find_extra(id: &str) -> Option<&'static ExtraService> {
    EXTRA_SERVICES.iter().find(|e| e.id == id)
}

/// Carousel lookup; any index wraps onto the list.
pub fn testimonial_at(index: i64) -> (usize, &'static Testimonial) {
    let len = TESTIMONIALS.len() as i64;
    let i = index.rem_euclid(len) as usize;
    (i, &TESTIMONIALS[i])
}
