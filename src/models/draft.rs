use serde::{Deserialize, Serialize};

/// Display slots offered by the booking form, in order.
pub const TIME_SLOTS: [&str; 10] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "01:00 PM", "02:00 PM", "03:00 PM",
    "04:00 PM", "05:00 PM", "06:00 PM",
];

/// In-progress appointment request, as typed by the visitor. All fields are
/// raw strings; typing is enforced at validation time, not on entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub appointment_type: String,
    pub date: String,
    pub time: String,
    pub message: String,
}

impl BookingDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::AppointmentType => &self.appointment_type,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FullName => self.full_name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::AppointmentType => self.appointment_type = value,
            Field::Date => self.date = value,
            Field::Time => self.time = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Phone,
    Email,
    AppointmentType,
    Date,
    Time,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::AppointmentType => "appointmentType",
            Field::Date => "date",
            Field::Time => "time",
            Field::Message => "message",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fullName" => Some(Field::FullName),
            "phone" => Some(Field::Phone),
            "email" => Some(Field::Email),
            "appointmentType" => Some(Field::AppointmentType),
            "date" => Some(Field::Date),
            "time" => Some(Field::Time),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

/// The four services the agency offers a visit for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentType {
    SiteVisit,
    VirtualTour,
    ConsultationCall,
    PropertyDiscussion,
}

impl AppointmentType {
    pub const ALL: [AppointmentType; 4] = [
        AppointmentType::SiteVisit,
        AppointmentType::VirtualTour,
        AppointmentType::ConsultationCall,
        AppointmentType::PropertyDiscussion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentType::SiteVisit => "Site Visit",
            AppointmentType::VirtualTour => "Virtual Tour",
            AppointmentType::ConsultationCall => "Consultation Call",
            AppointmentType::PropertyDiscussion => "Property Discussion",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}
