//! Seeds the store with sample donors and NGOs by driving the form
//! workflow end to end, printing what a submitter would see.

use food_donation_server::config::Config;
use food_donation_server::form::{FormController, FormSurface, PointerTarget, RequiredField};
use food_donation_server::models::{
    DonationSubmission, ExpiryHours, FormKind, NgoRequestSubmission,
};
use food_donation_server::store::open_store;

#[derive(Default)]
struct DonorForm {
    food_type: String,
    quantity: String,
    expiry_time: String,
    location: String,
}

impl FormSurface for DonorForm {
    type Submission = DonationSubmission;

    fn collect_fields(&self) -> DonationSubmission {
        DonationSubmission {
            food_type: self.food_type.clone(),
            quantity: self.quantity.clone(),
            expiry_time: Some(ExpiryHours::parse(&self.expiry_time)),
            location: self.location.clone(),
        }
    }

    fn clear(&mut self) {
        *self = DonorForm::default();
    }
}

#[derive(Default)]
struct NgoForm {
    ngo_name: String,
    food_needed: String,
    location: String,
}

impl FormSurface for NgoForm {
    type Submission = NgoRequestSubmission;

    fn collect_fields(&self) -> NgoRequestSubmission {
        NgoRequestSubmission {
            ngo_name: self.ngo_name.clone(),
            food_needed: self.food_needed.clone(),
            location: self.location.clone(),
        }
    }

    fn clear(&mut self) {
        *self = NgoForm::default();
    }
}

const SAMPLE_DONORS: &[(&str, &str, &str, &str)] = &[
    ("Rice", "10 kg", "48", "New York, NY"),
    ("Bread", "20 loaves", "24", "Brooklyn, NY"),
    ("Vegetables", "5 kg", "72", "Queens, NY"),
];

const SAMPLE_NGOS: &[(&str, &str, &str)] = &[
    ("Food Bank NYC", "Rice, Bread, Vegetables", "Manhattan, NY"),
    ("Community Kitchen", "Bread, Vegetables", "Bronx, NY"),
    ("Homeless Shelter", "Rice, Bread", "Staten Island, NY"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("food_donation_server=info,demo=info")
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let store = open_store(&config.database_path)?;

    // The validator is advisory: an untouched required field blurs to
    // invalid, and typing anything clears the mark.
    let mut location = RequiredField::new();
    location.on_blur("");
    println!("location field after empty blur: {:?}", location.border());
    location.on_input("New York, NY");
    println!("location field after typing:     {:?}", location.border());

    let mut donor_controller = FormController::new(FormKind::Donor, store.clone());
    let mut donor_form = DonorForm::default();

    for (food_type, quantity, expiry_time, sample_location) in SAMPLE_DONORS {
        donor_form.food_type = food_type.to_string();
        donor_form.quantity = quantity.to_string();
        donor_form.expiry_time = expiry_time.to_string();
        donor_form.location = sample_location.to_string();

        println!("[{}]", donor_controller.button_label());
        let outcome = donor_controller.submit(&mut donor_form).await;
        println!(
            "{} {:?}: {}",
            food_type,
            outcome,
            donor_controller.panel.message()
        );
        donor_controller.panel.on_pointer(PointerTarget::Backdrop);
    }

    let mut ngo_controller = FormController::new(FormKind::Ngo, store);
    let mut ngo_form = NgoForm::default();

    for (ngo_name, food_needed, sample_location) in SAMPLE_NGOS {
        ngo_form.ngo_name = ngo_name.to_string();
        ngo_form.food_needed = food_needed.to_string();
        ngo_form.location = sample_location.to_string();

        let outcome = ngo_controller.submit(&mut ngo_form).await;
        println!(
            "{} {:?}: {}",
            ngo_name,
            outcome,
            ngo_controller.panel.message()
        );
        ngo_controller.panel.on_escape();
    }

    println!(
        "Seeded {} donors and {} NGOs into {}",
        SAMPLE_DONORS.len(),
        SAMPLE_NGOS.len(),
        config.database_path
    );

    Ok(())
}
