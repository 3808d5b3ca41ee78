//! Static directories: clinic doctors and slots, hospital beds, blood donors,
//! insurance plans and the dashboard snapshot.

use crate::domain::model::{BedAvailability, BedCount, Doctor, Donor, Hospital, InsurancePlan};
use serde::Serialize;

pub static DOCTORS: [Doctor; 3] = [
    Doctor { id: "1", name: "Dr. Rajeev Mehta", specialty: "General Medicine" },
    Doctor { id: "2", name: "Dr. Priyanka Iyer", specialty: "Orthopedics" },
    Doctor { id: "3", name: "Dr. Vikas Menon", specialty: "Surgery" },
];

pub const TIME_SLOTS: [&str; 12] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30",
];

pub const BLOOD_TYPES: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

const fn beds(icu: (u32, u32), general: (u32, u32), emergency: (u32, u32)) -> BedAvailability {
    BedAvailability {
        icu: BedCount { total: icu.0, available: icu.1 },
        general: BedCount { total: general.0, available: general.1 },
        emergency: BedCount { total: emergency.0, available: emergency.1 },
    }
}

pub static HOSPITALS: [Hospital; 4] = [
    Hospital {
        id: 1,
        name: "SMIMER Hospital",
        distance: "3.2 km",
        phone: "+91 261 223 1111",
        beds: beds((40, 6), (250, 50), (15, 3)),
        location: "Udhna Darwaja, Surat",
    },
    Hospital {
        id: 2,
        name: "New Civil Hospital",
        distance: "5.1 km",
        phone: "+91 261 220 8888",
        beds: beds((60, 8), (300, 100), (25, 5)),
        location: "Majura Gate, Surat",
    },
    Hospital {
        id: 3,
        name: "Kiran Multi Super Specialty Hospital",
        distance: "7.5 km",
        phone: "+91 261 677 6777",
        beds: beds((50, 10), (200, 40), (10, 2)),
        location: "Katargam, Surat",
    },
    Hospital {
        id: 4,
        name: "Apple Hospital",
        distance: "4.3 km",
        phone: "+91 261 233 5678",
        beds: beds((30, 2), (150, 30), (12, 1)),
        location: "Varachha, Surat",
    },
];

pub static DONORS: [Donor; 6] = [
    Donor {
        id: 1,
        name: "Ravi Sharma",
        blood_type: "A+",
        location: "Surat",
        last_donation: "2024-01-15",
        phone: "+91 98765 43210",
        email: "ravi.sharma@email.com",
        available: true,
    },
    Donor {
        id: 2,
        name: "Anjali Patel",
        blood_type: "O-",
        location: "Ahmedabad",
        last_donation: "2024-02-01",
        phone: "+91 98654 32109",
        email: "anjali.patel@email.com",
        available: true,
    },
    Donor {
        id: 3,
        name: "Vikram Singh",
        blood_type: "B+",
        location: "Vadodara",
        last_donation: "2024-01-20",
        phone: "+91 97845 65432",
        email: "vikram.singh@email.com",
        available: false,
    },
    Donor {
        id: 4,
        name: "Meera Desai",
        blood_type: "AB+",
        location: "Mumbai",
        last_donation: "2024-03-05",
        phone: "+91 96543 21098",
        email: "meera.desai@email.com",
        available: true,
    },
    Donor {
        id: 5,
        name: "Rahul Verma",
        blood_type: "O+",
        location: "Delhi",
        last_donation: "2024-01-10",
        phone: "+91 99876 54321",
        email: "rahul.verma@email.com",
        available: true,
    },
    Donor {
        id: 6,
        name: "Sanya Iyer",
        blood_type: "B-",
        location: "Chennai",
        last_donation: "2023-12-28",
        phone: "+91 98765 09876",
        email: "sanya.iyer@email.com",
        available: false,
    },
];

pub static INSURANCE_PLANS: [InsurancePlan; 3] = [
    InsurancePlan {
        id: 1,
        name: "Apollo Munich Easy Health",
        provider: "Apollo Munich",
        premium: "₹5,500 / year",
        coverage: "₹10 Lakhs",
        hospitals: 9000,
        affiliated_hospitals: &["Fortis Hospital", "Apollo", "AIIMS", "Narayana Health"],
        conditions: &["Pre & Post Hospitalization", "Maternity Cover", "OPD Cover"],
        waiting_period: "2 years for pre-existing diseases",
        critical_illness: "Covered up to ₹5 Lakhs",
    },
    InsurancePlan {
        id: 2,
        name: "HDFC Ergo Health Suraksha",
        provider: "HDFC Ergo",
        premium: "₹7,200 / year",
        coverage: "₹15 Lakhs",
        hospitals: 12000,
        affiliated_hospitals: &["Max Healthcare", "Medanta", "AIIMS", "Manipal Hospitals"],
        conditions: &["Cashless Treatment", "Critical Illness Cover", "Daycare Cover"],
        waiting_period: "3 years for pre-existing diseases",
        critical_illness: "Covered up to ₹7 Lakhs",
    },
    InsurancePlan {
        id: 3,
        name: "Max Bupa Health Recharge",
        provider: "Max Bupa",
        premium: "₹6,800 / year",
        coverage: "₹12 Lakhs",
        hospitals: 8500,
        affiliated_hospitals: &["Apollo", "Fortis", "Columbia Asia", "Narayana Health"],
        conditions: &["No-Claim Bonus", "Annual Health Checkup", "Pre-Existing Disease Cover"],
        waiting_period: "1 year for pre-existing diseases",
        critical_illness: "Covered up to ₹6 Lakhs",
    },
];

pub fn doctor_by_name(name: &str) -> Option<&'static Doctor> {
    DOCTORS.iter().find(|d| d.name == name)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn search_hospitals(query: &str) -> Vec<&'static Hospital> {
    HOSPITALS
        .iter()
        .filter(|h| contains_ignore_case(h.name, query))
        .collect()
}

/// Name-or-location search, narrowed by an exact blood type when given.
pub fn search_donors(query: &str, blood_type: Option<&str>) -> Vec<&'static Donor> {
    DONORS
        .iter()
        .filter(|d| contains_ignore_case(d.name, query) || contains_ignore_case(d.location, query))
        .filter(|d| blood_type.map_or(true, |bt| d.blood_type == bt))
        .collect()
}

pub fn search_insurance_plans(query: &str) -> Vec<&'static InsurancePlan> {
    INSURANCE_PLANS
        .iter()
        .filter(|p| contains_ignore_case(p.name, query) || contains_ignore_case(p.provider, query))
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Vital {
    pub label: &'static str,
    pub value: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UpcomingVisit {
    pub doctor: &'static str,
    pub specialty: &'static str,
    pub when: &'static str,
}

pub const VITALS: [Vital; 4] = [
    Vital { label: "Heart Rate", value: "72 bpm", status: "normal" },
    Vital { label: "Blood Pressure", value: "120/80", status: "normal" },
    Vital { label: "SpO2", value: "98%", status: "good" },
    Vital { label: "Steps", value: "8,547", status: "active" },
];

pub const UPCOMING_VISITS: [UpcomingVisit; 2] = [
    UpcomingVisit { doctor: "Dr. Mayank Kashyap", specialty: "Cardiologist", when: "Tomorrow, 10:00 AM" },
    UpcomingVisit { doctor: "Dr. Shreya Sharma", specialty: "Neurologist", when: "Friday, 2:30 PM" },
];
