//! Dense embedding vectors and the similarity math over them

#[derive(Debug, Clone, PartialEq)]
pub struct Embedding(Vec<f32>);

impl Embedding {
	pub fn new(data: Vec<f32>) -> Self {
		Self(data)
	}

	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	pub fn dim(&self) -> usize {
		self.0.len()
	}

	/// Cosine similarity in [-1.0, 1.0]. Zero when either vector has no
	/// magnitude or the dimensions differ.
	pub fn cosine(&self, other: &Self) -> f64 {
		if self.0.len() != other.0.len() {
			return 0.0;
		}

		let (dot, norm_a, norm_b) = self.0.iter().zip(other.0.iter()).fold(
			(0.0f64, 0.0f64, 0.0f64),
			|(dot, na, nb), (&a, &b)| {
				let (a, b) = (a as f64, b as f64);
				(dot + a * b, na + a * a, nb + b * b)
			},
		);

		let denom = norm_a.sqrt() * norm_b.sqrt();
		if denom > 0.0 {
			dot / denom
		} else {
			0.0
		}
	}

	/// Mean cosine similarity against every embedding in `others`.
	pub fn mean_cosine(&self, others: &[Self]) -> f64 {
		if others.is_empty() {
			return 0.0;
		}
		others.iter().map(|o| self.cosine(o)).sum::<f64>() / others.len() as f64
	}

	/// Element-wise mean of equally sized embeddings.
	///
	/// Returns `None` for an empty input or when dimensions disagree.
	pub fn mean<I>(items: I) -> Option<Self>
	where
		I: IntoIterator<Item = Self>,
	{
		let mut iter = items.into_iter();
		let first = iter.next()?;
		let dim = first.dim();

		let (sum, count) = iter.try_fold((first.0, 1usize), |(mut acc, n), next| {
			if next.dim() != dim {
				return None;
			}
			acc.iter_mut().zip(next.0).for_each(|(a, b)| *a += b);
			Some((acc, n + 1))
		})?;

		let count = count as f32;
		Some(Self(sum.into_iter().map(|x| x / count).collect()))
	}
}
