// src/db/seed.rs

// Dados de demonstração do salão (semana de 22 a 28/01/2024).

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::{
    db::SalonStore,
    models::{
        appointments::{Appointment, AppointmentStatus, ServiceOffering},
        crm::{Client, ServiceRecord},
        finance::{Payment, PaymentMethod, PaymentStatus},
        inventory::Product,
    },
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("data de seed válida")
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("horário de seed válido")
}

fn money(amount: i64) -> Decimal {
    Decimal::from(amount)
}

/// Grade de horários da agenda: 09:00 a 18:30, de meia em meia hora.
pub fn time_slots() -> Vec<NaiveTime> {
    (0..20u32)
        .filter_map(|i| NaiveTime::from_hms_opt(9 + i / 2, (i % 2) * 30, 0))
        .collect()
}

pub fn service_catalog() -> Vec<ServiceOffering> {
    [
        ("Limpieza facial", 60, 800),
        ("Manicure", 45, 600),
        ("Pedicure", 60, 700),
        ("Masaje relajante", 90, 1200),
        ("Masaje deportivo", 90, 1400),
        ("Depilación", 120, 900),
        ("Tratamiento capilar", 90, 1500),
        ("Tratamiento facial", 75, 1000),
    ]
    .into_iter()
    .map(|(name, duration_minutes, price)| ServiceOffering {
        name: name.to_string(),
        duration_minutes,
        price: money(price),
    })
    .collect()
}

fn appointments() -> Vec<Appointment> {
    use AppointmentStatus::*;

    [
        (1, day(2024, 1, 27), at(9, 0), "María González", "+54 11 1234-5678", "Limpieza facial", 60, 800, Confirmed),
        (2, day(2024, 1, 27), at(10, 30), "Ana Rodríguez", "+54 11 2345-6789", "Manicure", 45, 600, InProgress),
        (3, day(2024, 1, 27), at(12, 0), "Carlos López", "+54 11 3456-7890", "Masaje relajante", 90, 1200, Pending),
        (4, day(2024, 1, 28), at(14, 0), "Sofia Martín", "+54 11 4567-8901", "Depilación", 120, 900, Pending),
        (5, day(2024, 1, 28), at(16, 30), "Laura Pérez", "+54 11 5678-9012", "Tratamiento capilar", 90, 1500, Pending),
    ]
    .into_iter()
    .map(
        |(id, date, time, client_name, client_phone, service, duration_minutes, price, status)| Appointment {
            id,
            date,
            time,
            client_name: client_name.to_string(),
            client_phone: client_phone.to_string(),
            service: service.to_string(),
            duration_minutes,
            price: money(price),
            status,
        },
    )
    .collect()
}

fn history(entries: &[(NaiveDate, &str, i64)]) -> Vec<ServiceRecord> {
    entries
        .iter()
        .map(|(date, service, price)| ServiceRecord {
            date: *date,
            service: service.to_string(),
            price: money(*price),
        })
        .collect()
}

fn clients() -> Vec<Client> {
    vec![
        Client {
            id: 1,
            name: "María González".into(),
            email: "maria.gonzalez@email.com".into(),
            phone: "+54 11 1234-5678".into(),
            birth_date: day(1985, 3, 15),
            preferences: "Prefiere tratamientos naturales".into(),
            services: history(&[
                (day(2024, 1, 20), "Limpieza facial", 800),
                (day(2024, 1, 10), "Manicure", 600),
                (day(2023, 12, 28), "Masaje relajante", 1200),
            ]),
        },
        Client {
            id: 2,
            name: "Ana Rodríguez".into(),
            email: "ana.rodriguez@email.com".into(),
            phone: "+54 11 2345-6789".into(),
            birth_date: day(1990, 7, 22),
            preferences: "Le gusta probar nuevos tratamientos".into(),
            services: history(&[
                (day(2024, 1, 18), "Depilación", 900),
                (day(2024, 1, 5), "Tratamiento capilar", 1500),
            ]),
        },
        Client {
            id: 3,
            name: "Carlos López".into(),
            email: "carlos.lopez@email.com".into(),
            phone: "+54 11 3456-7890".into(),
            birth_date: day(1988, 11, 8),
            preferences: "Prefiere masajes deportivos".into(),
            services: history(&[
                (day(2024, 1, 15), "Masaje deportivo", 1400),
                (day(2024, 1, 1), "Limpieza facial", 800),
            ]),
        },
    ]
}

fn products() -> Vec<Product> {
    [
        (1, "Crema hidratante facial", "Facial", 2, 5, 20, 850, "Belleza Natural SA", day(2024, 1, 15), "Crema hidratante para todo tipo de piel"),
        (2, "Aceite esencial de lavanda", "Aromaterapia", 1, 3, 10, 1200, "Esencias del Valle", day(2024, 1, 10), "Aceite puro de lavanda para relajación"),
        (3, "Toallas desechables", "Higiene", 15, 20, 100, 45, "Distribuidora Clean", day(2024, 1, 20), "Toallas desechables premium"),
        (4, "Mascarilla de arcilla", "Facial", 8, 5, 25, 680, "Tierra Natural", day(2024, 1, 18), "Mascarilla purificante de arcilla verde"),
        (5, "Cera depilatoria", "Depilación", 12, 8, 30, 520, "Depi Pro", day(2024, 1, 22), "Cera tibia para depilación"),
        (6, "Esmalte de uñas", "Manicure", 25, 15, 50, 280, "Color Express", day(2024, 1, 16), "Esmalte de larga duración"),
    ]
    .into_iter()
    .map(
        |(id, name, category, current_stock, minimum_stock, max_stock, unit_price, supplier, last_restock, description)| Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            current_stock,
            minimum_stock,
            max_stock,
            unit_price: money(unit_price),
            supplier: supplier.to_string(),
            last_restock,
            description: description.to_string(),
        },
    )
    .collect()
}

fn payments() -> Vec<Payment> {
    use PaymentMethod::*;
    use PaymentStatus::*;

    [
        (1, day(2024, 1, 27), "María González", "Limpieza facial", 800, Cash, Completed, 1),
        (2, day(2024, 1, 27), "Ana Rodríguez", "Manicure", 600, Card, Completed, 2),
        (3, day(2024, 1, 26), "Carlos López", "Masaje relajante", 1200, Transfer, Completed, 3),
        (4, day(2024, 1, 25), "Sofia Martín", "Depilación", 900, Cash, Pending, 4),
        (5, day(2024, 1, 24), "Laura Pérez", "Tratamiento capilar", 1500, Card, Completed, 5),
        // O turno 6 não está na agenda: a referência é só para consulta.
        (6, day(2024, 1, 23), "Pedro Gómez", "Masaje deportivo", 1400, Transfer, Completed, 6),
    ]
    .into_iter()
    .map(
        |(id, date, client_name, service, amount, method, status, appointment_id)| Payment {
            id,
            date,
            client_name: client_name.to_string(),
            service: service.to_string(),
            amount: money(amount),
            method,
            status,
            appointment_id: Some(appointment_id),
        },
    )
    .collect()
}

impl SalonStore {
    pub fn seeded() -> Self {
        SalonStore::new(
            appointments(),
            clients(),
            products(),
            payments(),
            service_catalog(),
            time_slots(),
        )
    }
}
