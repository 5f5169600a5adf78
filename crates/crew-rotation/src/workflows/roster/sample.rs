use super::domain::{Technician, TechnicianStatus, Trip};
use super::repository::InMemoryRoster;

fn technician(
    id: &str,
    name: &str,
    profile: &str,
    specialty: &str,
    home_base: &str,
    status: TechnicianStatus,
) -> Technician {
    Technician {
        id: id.to_string(),
        name: name.to_string(),
        profile: profile.to_string(),
        specialty: specialty.to_string(),
        home_base: home_base.to_string(),
        original_status: status,
    }
}

fn trip(technician_id: &str, date: &str, client: &str, city: &str, shift: Option<&str>) -> Trip {
    Trip {
        technician_id: technician_id.to_string(),
        date: date.to_string(),
        client: client.to_string(),
        client_city: city.to_string(),
        shift: shift.map(str::to_string),
    }
}

impl InMemoryRoster {
    /// Demonstration roster used by the CLI demo and when no data files are configured.
    pub fn sample() -> Self {
        let technicians = vec![
            technician(
                "T1",
                "Carlos Mendes",
                "Senior",
                "Electrical",
                "Joinville",
                TechnicianStatus::Active,
            ),
            technician(
                "T2",
                "Ana Ribeiro",
                "Mid",
                "Mechanical",
                "Curitiba",
                TechnicianStatus::OnVacation,
            ),
            technician(
                "T3",
                "Bruno Costa",
                "Junior",
                "Electrical",
                "Blumenau",
                TechnicianStatus::Active,
            ),
            technician(
                "T4",
                "Fernanda Lima",
                "Senior",
                "Instrumentation",
                "Itajaí",
                TechnicianStatus::Active,
            ),
            technician(
                "T5",
                "Diego Souza",
                "Mid",
                "Electrical",
                "Joinville",
                TechnicianStatus::OnLeave,
            ),
            technician(
                "T6",
                "Juliana Alves",
                "Mid",
                "Mechanical",
                "Florianópolis",
                TechnicianStatus::Active,
            ),
        ];

        let trips = vec![
            trip("T1", "2025-05-20", "Refinaria Sul", "Araucária", Some("Day")),
            trip("T1", "2025-03-10", "Porto Norte", "Paranaguá", None),
            trip("T2", "2025-04-02", "Usina Azul", "Lages", Some("Night")),
            trip("T4", "2025-01-15", "Celulose Vale", "Telêmaco Borba", Some("Day")),
            trip("T4", "2024-11-28", "Refinaria Sul", "Araucária", None),
            trip("T5", "2025-05-30", "Metalúrgica Leste", "Jaraguá do Sul", Some("Day")),
            trip("T6", "2025-05-05", "Porto Norte", "Paranaguá", Some("Night")),
            trip("T6", "2025-02-14", "Usina Azul", "Lages", None),
            trip("T6", "2025-01-08", "Celulose Vale", "Telêmaco Borba", None),
        ];

        Self::new(technicians, trips)
    }
}
