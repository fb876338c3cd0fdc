use crate::vertex::GpuVertex;
use mirror_mesh::Mesh;

const INITIAL_VERTEX_CAPACITY: usize = 256;
const INITIAL_INDEX_CAPACITY: usize = 512;

/// GPU copy of a [`Mesh`].
///
/// Buffers are reused between uploads and only reallocated when a mesh
/// outgrows them.
pub struct MeshBuffers {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    index_capacity: usize,
    index_count: u32,
    gpu_vertices: Vec<GpuVertex>,
}

impl MeshBuffers {
    pub fn new(device: &wgpu::Device) -> Self {
        Self {
            vertex_buffer: create_vertex_buffer(device, INITIAL_VERTEX_CAPACITY),
            index_buffer: create_index_buffer(device, INITIAL_INDEX_CAPACITY),
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            index_capacity: INITIAL_INDEX_CAPACITY,
            index_count: 0,
            gpu_vertices: Vec::with_capacity(INITIAL_VERTEX_CAPACITY),
        }
    }

    /// Replace the buffer contents with `mesh`.
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, mesh: &Mesh) {
        self.gpu_vertices.clear();
        self.gpu_vertices
            .extend(mesh.vertices.iter().copied().map(GpuVertex::from));

        // Resize vertex buffer if needed
        if self.gpu_vertices.len() > self.vertex_capacity {
            self.vertex_capacity = grown_capacity(self.gpu_vertices.len());
            self.vertex_buffer = create_vertex_buffer(device, self.vertex_capacity);
            log::debug!("mirror mesh vertex buffer grown to {}", self.vertex_capacity);
        }

        // Resize index buffer if needed
        if mesh.indices.len() > self.index_capacity {
            self.index_capacity = grown_capacity(mesh.indices.len());
            self.index_buffer = create_index_buffer(device, self.index_capacity);
            log::debug!("mirror mesh index buffer grown to {}", self.index_capacity);
        }

        if !mesh.indices.is_empty() {
            queue.write_buffer(
                &self.vertex_buffer,
                0,
                bytemuck::cast_slice(&self.gpu_vertices),
            );
            queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(&mesh.indices));
        }
        self.index_count = mesh.indices.len() as u32;
    }

    /// Number of indices from the last upload.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Record a draw of the uploaded mesh. The caller sets the pipeline and
    /// bind groups.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        if self.index_count == 0 {
            return;
        }
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

fn grown_capacity(len: usize) -> usize {
    (len * 2).next_power_of_two()
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Mirror Mesh Vertex Buffer"),
        size: (capacity * std::mem::size_of::<GpuVertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_index_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Mirror Mesh Index Buffer"),
        size: (capacity * std::mem::size_of::<u32>()) as u64,
        usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
