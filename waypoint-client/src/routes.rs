//! Route job endpoints of the real routing service

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;
use waypoint_core::domain::route::{JobHandle, RouteStatus};
use waypoint_core::dto::route::{RouteRequest, SubmitResponse};

use crate::error::{ClientError, Result};
use crate::transport::RouteTransport;
use crate::{RouteClient, handle_response};

impl RouteClient {
    // =============================================================================
    // Route Jobs
    // =============================================================================

    /// Submit a routing job
    ///
    /// # Arguments
    /// * `req` - Origin and destination of the route
    ///
    /// # Returns
    /// The token of the submitted job
    ///
    /// # Example
    /// ```no_run
    /// # use waypoint_client::RouteClient;
    /// # use waypoint_core::dto::route::RouteRequest;
    /// # async fn example() -> waypoint_client::Result<()> {
    /// let client = RouteClient::new("http://localhost:3000/route");
    /// let token = client
    ///     .request_route(&RouteRequest::new(
    ///         "Innocentre, Hong Kong",
    ///         "Hong Kong International Airport Terminal 1",
    ///     ))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request_route(&self, req: &RouteRequest) -> Result<JobHandle> {
        let response = self.client.post(&self.api_url).json(req).send().await?;

        let submitted: SubmitResponse = handle_response(response).await?;
        debug!("Submitted route job {}", submitted.token);
        Ok(submitted.token)
    }

    /// Get the status of a routing job
    ///
    /// # Arguments
    /// * `token` - The token returned by [`RouteClient::request_route`]
    pub async fn get_route_status(&self, token: &JobHandle) -> Result<RouteStatus> {
        let url = self.status_url(token)?;
        let response = self.client.get(url).send().await?;

        handle_response(response).await
    }

    /// `{api_url}/{token}` with the token escaped as a single path segment
    fn status_url(&self, token: &JobHandle) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.api_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(format!("{} cannot take a path", self.api_url)))?
            .push(token.as_str());

        Ok(url)
    }
}

#[async_trait]
impl RouteTransport for RouteClient {
    async fn submit_job(&self, origin: &str, destination: &str) -> Result<JobHandle> {
        self.request_route(&RouteRequest::new(origin, destination))
            .await
    }

    async fn fetch_job_status(&self, handle: &JobHandle) -> Result<RouteStatus> {
        self.get_route_status(handle).await
    }
}
