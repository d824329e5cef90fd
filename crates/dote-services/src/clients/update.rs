use std::sync::Arc;

use dote_contracts::{ClientContract, Contract};
use dote_models::{
    BrandStory, Client, ClientContact, ClientPersona, ColorPalette, CorporateProfile,
    DigitalChannels, SocialPlatformMetric, ToneProfile,
};
use dote_store::ClientStore;

use super::{ClientParams, SetClientAttributesService};
use crate::result::ServiceResult;

/// Edits a client record. Basic fields go through params; each brandbook
/// section is replaced as a whole, the way the editor saves one tab at a
/// time. Every path validates the full record before persisting.
pub struct UpdateClientService {
    clients: Arc<dyn ClientStore>,
}

impl UpdateClientService {
    pub fn new(clients: Arc<dyn ClientStore>) -> Self {
        Self { clients }
    }

    pub async fn call(&self, client: Client, params: &ClientParams) -> ServiceResult<Client> {
        let result = SetClientAttributesService::new(client).call(params);
        if result.is_failure() {
            return result;
        }
        self.persist(result.unwrap()).await
    }

    pub async fn update_corporate(
        &self,
        mut client: Client,
        corporate: CorporateProfile,
    ) -> ServiceResult<Client> {
        client.corporate = corporate;
        self.validate_and_persist(client).await
    }

    pub async fn update_channels(
        &self,
        mut client: Client,
        channels: DigitalChannels,
    ) -> ServiceResult<Client> {
        client.channels = channels;
        self.validate_and_persist(client).await
    }

    pub async fn update_story(&self, mut client: Client, story: BrandStory) -> ServiceResult<Client> {
        client.story = story;
        self.validate_and_persist(client).await
    }

    pub async fn update_contacts(
        &self,
        mut client: Client,
        contacts: Vec<ClientContact>,
    ) -> ServiceResult<Client> {
        client.contacts = contacts;
        self.validate_and_persist(client).await
    }

    /// Replace the persona with the same id, or append it as a new one.
    pub async fn upsert_persona(
        &self,
        mut client: Client,
        persona: ClientPersona,
    ) -> ServiceResult<Client> {
        match client.personas.iter_mut().find(|p| p.id == persona.id) {
            Some(slot) => *slot = persona,
            None => client.personas.push(persona),
        }
        self.validate_and_persist(client).await
    }

    pub async fn update_tone(&self, mut client: Client, tone: ToneProfile) -> ServiceResult<Client> {
        client.tone = tone;
        self.validate_and_persist(client).await
    }

    pub async fn update_social(
        &self,
        mut client: Client,
        social_history: Vec<SocialPlatformMetric>,
    ) -> ServiceResult<Client> {
        client.social_history = social_history;
        self.validate_and_persist(client).await
    }

    pub async fn update_colors(
        &self,
        mut client: Client,
        colors: ColorPalette,
    ) -> ServiceResult<Client> {
        client.colors = colors;
        self.validate_and_persist(client).await
    }

    pub async fn update_logo(
        &self,
        mut client: Client,
        logo: Option<String>,
    ) -> ServiceResult<Client> {
        client.logo = logo;
        self.validate_and_persist(client).await
    }

    async fn validate_and_persist(&self, client: Client) -> ServiceResult<Client> {
        if let Err(errors) = ClientContract.validate(&client) {
            return ServiceResult::failure(errors);
        }
        self.persist(client).await
    }

    async fn persist(&self, client: Client) -> ServiceResult<Client> {
        if let Err(err) = self.clients.put(client.clone()).await {
            return ServiceResult::failure_with_base_error(err.to_string());
        }
        tracing::debug!(client_id = %client.id, "client updated");
        ServiceResult::success(client)
    }
}
