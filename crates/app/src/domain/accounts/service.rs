//! Accounts service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::debug;

use crate::{
    auth::passwords::{hash_password, verify_password},
    database::Db,
    domain::accounts::{
        errors::AccountsServiceError,
        models::{
            CustomerAccount, CustomerCredential, CustomerId, CustomerLogin, CustomerProfileUpdate,
            NewCustomer, NewProvider, ProviderAccount, ProviderId, ProviderLogin, SocialLogin,
            usable_device_token,
        },
        repositories::{PgCustomersRepository, PgProvidersRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgAccountsService {
    db: Db,
    customers_repository: PgCustomersRepository,
    providers_repository: PgProvidersRepository,
}

impl PgAccountsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            customers_repository: PgCustomersRepository::new(),
            providers_repository: PgProvidersRepository::new(),
        }
    }

    async fn refresh_customer_device_token(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: &mut CustomerAccount,
        device_token: Option<&str>,
    ) -> Result<(), AccountsServiceError> {
        if let Some(device_token) = usable_device_token(device_token) {
            self.customers_repository
                .update_device_token(tx, account.id, device_token)
                .await?;

            account.device_token = Some(device_token.to_string());
        }

        Ok(())
    }

    async fn refresh_provider_device_token(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        account: &mut ProviderAccount,
        device_token: Option<&str>,
    ) -> Result<(), AccountsServiceError> {
        if let Some(device_token) = usable_device_token(device_token) {
            self.providers_repository
                .update_device_token(tx, account.id, device_token)
                .await?;

            account.device_token = Some(device_token.to_string());
        }

        Ok(())
    }
}

#[async_trait]
impl AccountsService for PgAccountsService {
    async fn authenticate_customer(
        &self,
        login: CustomerLogin,
    ) -> Result<CustomerAccount, AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .customers_repository
            .find_by_email(&mut tx, &login.email)
            .await?
            .ok_or(AccountsServiceError::NotFound)?;

        match &login.credential {
            CustomerCredential::Password(password) => {
                let matches = record
                    .password_hash
                    .as_deref()
                    .is_some_and(|hash| verify_password(hash, password));

                if !matches {
                    return Err(AccountsServiceError::InvalidCredentials);
                }
            }
            CustomerCredential::Social => {
                debug!(customer_id = %record.account.id, "customer login without password check");
            }
        }

        let mut account = record.account;

        self.refresh_customer_device_token(&mut tx, &mut account, login.device_token.as_deref())
            .await?;

        tx.commit().await?;

        Ok(account)
    }

    async fn sign_up_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerAccount, AccountsServiceError> {
        let password_hash = hash_password(&customer.password)?;
        let device_token = usable_device_token(customer.device_token.as_deref());

        let mut tx = self.db.begin().await?;

        let account = self
            .customers_repository
            .create_customer(&mut tx, &customer, &password_hash, device_token)
            .await?;

        tx.commit().await?;

        Ok(account)
    }

    async fn authenticate_social(
        &self,
        login: SocialLogin,
    ) -> Result<CustomerAccount, AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .customers_repository
            .create_social_if_absent(&mut tx, &login.email, &login.full_name, None)
            .await?;

        if created > 0 {
            debug!("registered social customer");
        }

        let mut account = self
            .customers_repository
            .find_by_email(&mut tx, &login.email)
            .await?
            .ok_or(AccountsServiceError::NotFound)?
            .account;

        self.refresh_customer_device_token(&mut tx, &mut account, login.device_token.as_deref())
            .await?;

        tx.commit().await?;

        Ok(account)
    }

    async fn authenticate_provider(
        &self,
        login: ProviderLogin,
    ) -> Result<ProviderAccount, AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .providers_repository
            .find_by_email(&mut tx, &login.email)
            .await?
            .ok_or(AccountsServiceError::NotFound)?;

        if !verify_password(&record.password_hash, &login.password) {
            return Err(AccountsServiceError::InvalidCredentials);
        }

        let mut account = record.account;

        self.refresh_provider_device_token(&mut tx, &mut account, login.device_token.as_deref())
            .await?;

        tx.commit().await?;

        Ok(account)
    }

    async fn create_provider(
        &self,
        provider: NewProvider,
    ) -> Result<ProviderAccount, AccountsServiceError> {
        if provider.max_distance_km < 0 {
            return Err(AccountsServiceError::InvalidData);
        }

        let password_hash = hash_password(&provider.password)?;

        let mut tx = self.db.begin().await?;

        let account = self
            .providers_repository
            .create_provider(&mut tx, &provider, &password_hash)
            .await?;

        tx.commit().await?;

        Ok(account)
    }

    async fn get_customer(
        &self,
        customer: CustomerId,
    ) -> Result<CustomerAccount, AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let account = self
            .customers_repository
            .get_customer(&mut tx, customer)
            .await?;

        tx.commit().await?;

        Ok(account)
    }

    async fn get_provider(
        &self,
        provider: ProviderId,
    ) -> Result<ProviderAccount, AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let account = self
            .providers_repository
            .get_provider(&mut tx, provider)
            .await?;

        tx.commit().await?;

        Ok(account)
    }

    async fn update_customer_profile(
        &self,
        customer: CustomerId,
        profile: CustomerProfileUpdate,
    ) -> Result<CustomerAccount, AccountsServiceError> {
        if profile.full_name.trim().is_empty() {
            return Err(AccountsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let account = self
            .customers_repository
            .update_profile(&mut tx, customer, &profile)
            .await?;

        tx.commit().await?;

        debug!(customer_id = %customer, "customer profile updated");

        Ok(account)
    }

    async fn update_customer_device_token(
        &self,
        customer: CustomerId,
        device_token: String,
    ) -> Result<(), AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .customers_repository
            .update_device_token(&mut tx, customer, &device_token)
            .await?;

        if rows_affected == 0 {
            return Err(AccountsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn update_provider_device_token(
        &self,
        provider: ProviderId,
        device_token: String,
    ) -> Result<(), AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .providers_repository
            .update_device_token(&mut tx, provider, &device_token)
            .await?;

        if rows_affected == 0 {
            return Err(AccountsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn set_provider_active(
        &self,
        provider: ProviderId,
        active: bool,
    ) -> Result<ProviderAccount, AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let account = self
            .providers_repository
            .set_active(&mut tx, provider, active)
            .await?;

        tx.commit().await?;

        debug!(provider_id = %provider, active, "provider availability changed");

        Ok(account)
    }

    async fn set_provider_max_distance(
        &self,
        provider: ProviderId,
        max_distance_km: i64,
    ) -> Result<ProviderAccount, AccountsServiceError> {
        if max_distance_km < 0 {
            return Err(AccountsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let account = self
            .providers_repository
            .set_max_distance(&mut tx, provider, max_distance_km)
            .await?;

        tx.commit().await?;

        Ok(account)
    }
}

#[automock]
#[async_trait]
pub trait AccountsService: Send + Sync {
    /// Check a customer's credentials.
    ///
    /// A usable device token on the login replaces the stored one.
    async fn authenticate_customer(
        &self,
        login: CustomerLogin,
    ) -> Result<CustomerAccount, AccountsServiceError>;

    /// Register an email/password customer.
    async fn sign_up_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerAccount, AccountsServiceError>;

    /// Log a social customer in, registering them on first use.
    async fn authenticate_social(
        &self,
        login: SocialLogin,
    ) -> Result<CustomerAccount, AccountsServiceError>;

    /// Check a provider's credentials.
    async fn authenticate_provider(
        &self,
        login: ProviderLogin,
    ) -> Result<ProviderAccount, AccountsServiceError>;

    /// Register a provider. New providers start inactive.
    async fn create_provider(
        &self,
        provider: NewProvider,
    ) -> Result<ProviderAccount, AccountsServiceError>;

    async fn get_customer(
        &self,
        customer: CustomerId,
    ) -> Result<CustomerAccount, AccountsServiceError>;

    async fn get_provider(
        &self,
        provider: ProviderId,
    ) -> Result<ProviderAccount, AccountsServiceError>;

    /// Replace a customer's contact details. The name may not be blank.
    async fn update_customer_profile(
        &self,
        customer: CustomerId,
        profile: CustomerProfileUpdate,
    ) -> Result<CustomerAccount, AccountsServiceError>;

    async fn update_customer_device_token(
        &self,
        customer: CustomerId,
        device_token: String,
    ) -> Result<(), AccountsServiceError>;

    async fn update_provider_device_token(
        &self,
        provider: ProviderId,
        device_token: String,
    ) -> Result<(), AccountsServiceError>;

    /// Open or close a provider for new orders.
    async fn set_provider_active(
        &self,
        provider: ProviderId,
        active: bool,
    ) -> Result<ProviderAccount, AccountsServiceError>;

    /// Set how far a provider is willing to travel.
    async fn set_provider_max_distance(
        &self,
        provider: ProviderId,
        max_distance_km: i64,
    ) -> Result<ProviderAccount, AccountsServiceError>;
}
