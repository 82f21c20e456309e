// src/services/schedule_service.rs

use chrono::{Datelike, Days, NaiveDate, NaiveTime};

use crate::{
    common::{
        error::AppError,
        search,
        time_format::{format_hhmm, weekday_short},
    },
    db::SharedStore,
    middleware::i18n::Locale,
    models::appointments::{
        AgendaDay, Appointment, AppointmentListing, AppointmentStatus, AppointmentView,
        ScheduleCatalog, ViewMode,
    },
};

// ---
// Janela de datas
// ---

/// Dia: `[reference]`. Semana: os 7 dias a partir da segunda-feira mais
/// recente <= `reference` (domingo pertence à semana iniciada 6 dias antes).
///
/// Nos extremos do calendário do chrono, onde a semana inteira não existe,
/// a janela semanal cai para o próprio dia.
pub fn date_window(reference: NaiveDate, view: ViewMode) -> Vec<NaiveDate> {
    match view {
        ViewMode::Day => vec![reference],
        ViewMode::Week => {
            let offset = u64::from(reference.weekday().num_days_from_monday());
            let full_week = reference
                .checked_sub_days(Days::new(offset))
                .filter(|start| start.checked_add_days(Days::new(6)).is_some());
            match full_week {
                Some(start) => start.iter_days().take(7).collect(),
                None => vec![reference],
            }
        }
    }
}

/// Agendamentos cuja data cai dentro da janela (inclusive), na ordem de entrada.
pub fn filter_by_window<'a>(appointments: &'a [Appointment], window: &[NaiveDate]) -> Vec<&'a Appointment> {
    let (Some(first), Some(last)) = (window.first(), window.last()) else {
        return Vec::new();
    };
    appointments
        .iter()
        .filter(|a| a.date >= *first && a.date <= *last)
        .collect()
}

#[derive(Clone)]
pub struct ScheduleService {
    store: SharedStore,
}

impl ScheduleService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    // --- LISTAGEM (dia ou semana) ---
    pub async fn list_appointments(
        &self,
        reference: NaiveDate,
        view: ViewMode,
        query: &str,
        locale: &Locale,
    ) -> AppointmentListing {
        let store = self.store.read().await;
        let dates = date_window(reference, view);

        let appointments = filter_by_window(store.appointments(), &dates)
            .into_iter()
            .filter(|a| search::matches(*a, query))
            .map(|a| AppointmentView::new(a, locale))
            .collect();

        AppointmentListing { view, dates, appointments }
    }

    // --- SEMANA AGRUPADA POR DIA ---
    pub async fn week_agenda(&self, reference: NaiveDate, locale: &Locale) -> Vec<AgendaDay> {
        let store = self.store.read().await;
        let window = date_window(reference, ViewMode::Week);
        let in_week = filter_by_window(store.appointments(), &window);

        window
            .iter()
            .map(|date| AgendaDay {
                date: *date,
                weekday: weekday_short(*date, locale),
                appointments: in_week
                    .iter()
                    .filter(|a| a.date == *date)
                    .map(|a| AppointmentView::new(a, locale))
                    .collect(),
            })
            .collect()
    }

    pub async fn catalog(&self) -> ScheduleCatalog {
        let store = self.store.read().await;
        ScheduleCatalog {
            services: store.services().to_vec(),
            time_slots: store.time_slots().iter().map(|t| format_hhmm(*t)).collect(),
        }
    }

    // --- AGENDAR ---
    // Duração e preço vêm do catálogo; o turno nasce pendente.
    pub async fn schedule(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        client_name: &str,
        client_phone: &str,
        service: &str,
    ) -> Result<Appointment, AppError> {
        let mut store = self.store.write().await;

        let offering = store
            .find_service(service)
            .cloned()
            .ok_or_else(|| AppError::UnknownService(service.to_string()))?;

        if !store.time_slots().contains(&time) {
            return Err(AppError::UnavailableTimeSlot(format_hhmm(time)));
        }

        let appointment = Appointment {
            id: store.next_appointment_id(),
            date,
            time,
            client_name: client_name.trim().to_string(),
            client_phone: client_phone.trim().to_string(),
            service: offering.name,
            duration_minutes: offering.duration_minutes,
            price: offering.price,
            status: AppointmentStatus::Pending,
        };
        store.insert_appointment(appointment.clone());

        tracing::info!(
            "📅 Turno {} agendado: {} {} ({})",
            appointment.id,
            appointment.date,
            format_hhmm(appointment.time),
            appointment.service
        );
        Ok(appointment)
    }

    // --- TRANSIÇÃO DE STATUS ---
    pub async fn transition(&self, id: u32, next: AppointmentStatus) -> Result<Appointment, AppError> {
        let mut store = self.store.write().await;
        let appointment = store
            .appointment_mut(id)
            .ok_or(AppError::AppointmentNotFound(id))?;

        let current = appointment.status;
        if !current.can_transition_to(next) {
            tracing::warn!("Transição recusada no turno {}: {} -> {}", id, current.code(), next.code());
            return Err(AppError::InvalidStatusTransition {
                from: current.code(),
                to: next.code(),
            });
        }

        appointment.status = next;
        tracing::info!("Turno {}: {} -> {}", id, current.code(), next.code());
        Ok(appointment.clone())
    }

    // O painel tinha o botão de excluir sem ação nenhuma.
    pub async fn delete(&self, id: u32) -> Result<(), AppError> {
        let store = self.store.read().await;
        if store.find_appointment(id).is_none() {
            return Err(AppError::AppointmentNotFound(id));
        }
        Err(AppError::NotImplemented("delete appointment"))
    }
}
